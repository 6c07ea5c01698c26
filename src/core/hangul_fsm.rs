//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 두벌식 키 입력을 한 글자씩 받아 초성/중성/종성 슬롯을 채우고,
//! 더 이상 현재 음절을 확장할 수 없을 때 음절을 확정(flush)합니다.
//! 종성 뒤에 모음이 오면 종성을 떼어 다음 음절의 초성으로 넘깁니다.

use crate::core::layout::{map_to_jamo, Jamo};
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jungseong_to_jamo_char, split_jongseong,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성 (한 글자 조합 중)
    ChoseongJungseong,
    /// 초성+중성+종성 (한 글자 조합 중)
    ChoseongJungseongJongseong,
}

/// 한글 조합 FSM
///
/// 변환 한 번마다 새로 만들어 쓰고 버립니다.
pub struct HangulFsm {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 초성을 입력한 키 (낱자 출력 시 사용)
    choseong_key: char,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 낱자모를 호환용 자모로 출력할지 (false면 입력 키 그대로)
    convert_single_letter: bool,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성 (낱자모는 호환용 자모로 출력)
    pub fn new() -> Self {
        Self::with_single_letter(true)
    }

    /// 낱자모 출력 방식을 지정하여 FSM 생성
    pub fn with_single_letter(convert_single_letter: bool) -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            choseong_key: '\0',
            jungseong: 0,
            jongseong: 0,
            convert_single_letter,
            output: String::new(),
        }
    }

    /// 현재 상태
    pub fn state(&self) -> State {
        self.state
    }

    /// 지금까지 확정된 출력
    pub fn committed(&self) -> &str {
        &self.output
    }

    /// 영문 키 하나 입력 (매핑 없는 문자는 음절 경계로 처리)
    pub fn feed_key(&mut self, key: char) {
        match map_to_jamo(key) {
            Some(jamo) => self.feed(key, jamo),
            None => self.feed_passthrough(key),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, key: char, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(key, cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(key, jung_index),
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, key: char, cho_index: u32, jong_index: Option<u32>) {
        match self.state {
            State::Empty => {
                self.start_choseong(key, cho_index);
            }
            State::Choseong => {
                // 기존 초성을 낱자로 출력하고 새 초성으로 교체
                self.flush_current();
                self.start_choseong(key, cho_index);
            }
            State::ChoseongJungseong => match jong_index {
                Some(jong) => {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                }
                None => {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.flush_current();
                    self.start_choseong(key, cho_index);
                }
            },
            State::ChoseongJungseongJongseong => {
                // 겹받침 조합 시도
                let combined = jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong));
                match combined {
                    Some(combined) => self.jongseong = combined,
                    None => {
                        self.flush_current();
                        self.start_choseong(key, cho_index);
                    }
                }
            }
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, key: char, jung_index: u32) {
        match self.state {
            State::Empty => {
                // 초성 없이는 음절을 만들 수 없으므로 모음만 낱자로 출력
                self.push_single(jungseong_to_jamo_char(jung_index), key);
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    self.flush_current();
                    self.push_single(jungseong_to_jamo_char(jung_index), key);
                }
            }
            State::ChoseongJungseongJongseong => {
                self.reassign_jongseong(key, jung_index);
            }
        }
    }

    /// 종성을 다음 음절의 초성으로 넘김
    ///
    /// 겹받침이면 뒤 자음만 넘기고 앞 자음은 종성으로 남깁니다.
    /// (예: 읽 + ㅓ -> 일 + 거)
    fn reassign_jongseong(&mut self, key: char, jung_index: u32) {
        let (remaining, next_cho) = match split_jongseong(self.jongseong) {
            Some(split) => split,
            None => match jongseong_to_choseong(self.jongseong) {
                Some(next_cho) => (0, next_cho),
                None => {
                    // 변환 불가 (배치표가 완전하면 발생하지 않음)
                    log::warn!("초성으로 옮길 수 없는 종성: {}", self.jongseong);
                    self.flush_current();
                    self.push_single(jungseong_to_jamo_char(jung_index), key);
                    return;
                }
            },
        };

        self.jongseong = remaining;
        self.state = if remaining == 0 {
            State::ChoseongJungseong
        } else {
            State::ChoseongJungseongJongseong
        };
        self.flush_current();

        self.choseong = next_cho;
        self.jungseong = jung_index;
        self.state = State::ChoseongJungseong;
    }

    fn start_choseong(&mut self, key: char, cho_index: u32) {
        self.choseong = cho_index;
        self.choseong_key = key;
        self.state = State::Choseong;
    }

    /// 낱자모 출력
    fn push_single(&mut self, jamo: Option<char>, key: char) {
        match jamo {
            Some(c) if self.convert_single_letter => self.output.push(c),
            _ => self.output.push(key),
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가하고 상태 초기화
    pub fn flush_current(&mut self) {
        match self.state {
            State::Empty => {}
            State::Choseong => {
                let key = self.choseong_key;
                self.push_single(choseong_to_jamo_char(self.choseong), key);
            }
            State::ChoseongJungseong => self.push_syllable(0),
            State::ChoseongJungseongJongseong => self.push_syllable(self.jongseong),
        }
        self.reset_state();
    }

    fn push_syllable(&mut self, jongseong: u32) {
        match compose_syllable(self.choseong, self.jungseong, jongseong) {
            Ok(c) => self.output.push(c),
            Err(e) => log::warn!("음절 조합 실패: {}", e),
        }
    }

    /// 상태 초기화
    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.choseong = 0;
        self.choseong_key = '\0';
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 변환 불가 문자 처리 (숫자, 특수문자, 한글 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        let mut fsm = HangulFsm::new();
        for c in input.chars() {
            fsm.feed_key(c);
        }
        fsm.finish()
    }

    #[test]
    fn test_basic_syllable() {
        assert_eq!(convert("rk"), "가"); // ㄱ + ㅏ
        assert_eq!(convert("sk"), "나"); // ㄴ + ㅏ
    }

    #[test]
    fn test_with_jongseong() {
        assert_eq!(convert("rkr"), "각");
        assert_eq!(convert("gks"), "한");
    }

    #[test]
    fn test_state_transitions() {
        let mut fsm = HangulFsm::new();
        assert_eq!(fsm.state(), State::Empty);
        fsm.feed_key('g');
        assert_eq!(fsm.state(), State::Choseong);
        fsm.feed_key('k');
        assert_eq!(fsm.state(), State::ChoseongJungseong);
        fsm.feed_key('s');
        assert_eq!(fsm.state(), State::ChoseongJungseongJongseong);
        assert_eq!(fsm.committed(), "");
        assert_eq!(fsm.finish(), "한");
    }

    #[test]
    fn test_jongseong_reassigned_to_next_choseong() {
        let mut fsm = HangulFsm::new();
        for c in "rkr".chars() {
            fsm.feed_key(c);
        }
        assert_eq!(fsm.state(), State::ChoseongJungseongJongseong);

        // 모음이 오면 종성 ㄱ이 떨어져 나가 '가'만 확정
        fsm.feed_key('k');
        assert_eq!(fsm.committed(), "가");
        assert_eq!(fsm.state(), State::ChoseongJungseong);
        assert_eq!(fsm.finish(), "가가");

        assert_eq!(convert("dkswl"), "안지");
    }

    #[test]
    fn test_compound_jongseong_split() {
        // 읽 + ㅓ -> 일 + 거
        assert_eq!(convert("dlfrj"), "일거");
        // 없 + ㅓ -> 업 + 서
        assert_eq!(convert("djqtj"), "업서");
    }

    #[test]
    fn test_complex_jungseong() {
        assert_eq!(convert("dhk"), "와");
        assert_eq!(convert("dnj"), "워");
        assert_eq!(convert("dml"), "의");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dkfr"), "앍");
        assert_eq!(convert("dkswdk"), "앉아");
    }

    #[test]
    fn test_jongseong_impossible_consonant() {
        // ㄸ은 종성이 될 수 없으므로 새 음절 시작
        assert_eq!(convert("rkEk"), "가따");
    }

    #[test]
    fn test_passthrough_is_boundary() {
        assert_eq!(convert("123"), "123");
        assert_eq!(convert("rk!sk"), "가!나");
        assert_eq!(convert("rkr sk"), "각 나");
        // 낱자모/한글도 경계로 취급
        assert_eq!(convert("rkㄱk"), "가ㄱㅏ");
        assert_eq!(convert("r가k"), "ㄱ가ㅏ");
    }

    #[test]
    fn test_consonant_only() {
        assert_eq!(convert("r"), "ㄱ");
        assert_eq!(convert("rs"), "ㄱㄴ");
    }

    #[test]
    fn test_vowel_only() {
        assert_eq!(convert("k"), "ㅏ");
        assert_eq!(convert("kh"), "ㅏㅗ");
    }

    #[test]
    fn test_single_letter_kept_as_key() {
        let run = |input: &str| {
            let mut fsm = HangulFsm::with_single_letter(false);
            for c in input.chars() {
                fsm.feed_key(c);
            }
            fsm.finish()
        };
        assert_eq!(run("r"), "r");
        assert_eq!(run("k"), "k");
        assert_eq!(run("rkk"), "가k");
        assert_eq!(run("rsk"), "r나");
        assert_eq!(run("gksrmf"), "한글");
    }

    #[test]
    fn test_empty() {
        assert_eq!(convert(""), "");
    }
}
