//! 두벌식 자판 배치표
//!
//! 초성 19개, 중성 21개, 종성 27개(종성 없음 제외)의 호환용 자모와
//! 이를 입력하는 영문 키를 하나의 불변 테이블로 묶고,
//! 정방향(슬롯/자모 -> 키)과 역방향(키 -> 자모) 색인을 함께 만듭니다.
//! 복합 모음(ㅘ)과 겹받침(ㄺ)은 두 키 조합으로 표현됩니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{
    choseong_to_jamo_char, jongseong_to_jamo_char, jungseong_to_jamo_char, Slot,
};

// 초성 인덱스 순서 (19개):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
const CHOSEONG_KEYS: [&str; 19] = [
    "r", "R", "s", "e", "E", "f", "a", "q", "Q", "t",
    "T", "d", "w", "W", "c", "z", "x", "v", "g",
];

// 중성 인덱스 순서 (21개):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
const JUNGSEONG_KEYS: [&str; 21] = [
    "k", "o", "i", "O", "j", "p", "u", "P", "h", "hk",
    "ho", "hl", "y", "n", "nj", "np", "nl", "b", "m", "ml", "l",
];

// 종성 인덱스 순서 (28개, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
const JONGSEONG_KEYS: [&str; 28] = [
    "",
    "r", "R", "rt", "s", "sw", "sg", "e", "f", "fr", "fa",
    "fq", "ft", "fx", "fv", "fg", "a", "q", "qt", "t", "T",
    "d", "w", "c", "z", "x", "v", "g",
];

lazy_static! {
    /// 프로세스 전역 배치표 (최초 접근 시 한 번 생성, 이후 읽기 전용)
    pub static ref LAYOUT: LayoutMap = LayoutMap::build();
}

/// 영문 키 하나가 나타내는 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }
}

/// 배치표 항목: 한 슬롯의 자모 하나와 그 자모를 입력하는 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub slot: Slot,
    /// 슬롯 내 인덱스 (종성은 1~27)
    pub index: u32,
    /// 호환용 자모
    pub jamo: char,
    /// 입력 키 (1~2글자)
    pub keys: &'static str,
}

/// 두벌식 양방향 배치표
#[derive(Debug)]
pub struct LayoutMap {
    entries: Vec<LayoutEntry>,
    by_slot: HashMap<(Slot, u32), usize>,
    by_jamo: HashMap<char, usize>,
    by_key: HashMap<char, Jamo>,
}

impl LayoutMap {
    fn build() -> Self {
        let mut entries = Vec::with_capacity(19 + 21 + 27);

        for (index, keys) in (0u32..).zip(CHOSEONG_KEYS) {
            if let Some(jamo) = choseong_to_jamo_char(index) {
                entries.push(LayoutEntry {
                    slot: Slot::Choseong,
                    index,
                    jamo,
                    keys,
                });
            }
        }
        for (index, keys) in (0u32..).zip(JUNGSEONG_KEYS) {
            if let Some(jamo) = jungseong_to_jamo_char(index) {
                entries.push(LayoutEntry {
                    slot: Slot::Jungseong,
                    index,
                    jamo,
                    keys,
                });
            }
        }
        // 종성 없음(0)은 자모가 없으므로 건너뜀
        for (index, keys) in (0u32..).zip(JONGSEONG_KEYS) {
            if let Some(jamo) = jongseong_to_jamo_char(index) {
                entries.push(LayoutEntry {
                    slot: Slot::Jongseong,
                    index,
                    jamo,
                    keys,
                });
            }
        }

        let mut by_slot = HashMap::with_capacity(entries.len());
        let mut by_jamo = HashMap::with_capacity(entries.len());
        let mut by_key: HashMap<char, Jamo> = HashMap::new();

        for (pos, entry) in entries.iter().enumerate() {
            by_slot.insert((entry.slot, entry.index), pos);
            // 초성과 종성이 같은 자모를 공유하면 먼저 들어간 초성 항목 사용
            by_jamo.entry(entry.jamo).or_insert(pos);

            // 역방향 색인은 단일 키 항목만 대상
            let mut chars = entry.keys.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => continue,
            };
            match entry.slot {
                Slot::Choseong => {
                    by_key.insert(
                        key,
                        Jamo::Consonant {
                            cho_index: entry.index,
                            jong_index: None,
                        },
                    );
                }
                Slot::Jungseong => {
                    by_key.insert(
                        key,
                        Jamo::Vowel {
                            jung_index: entry.index,
                        },
                    );
                }
                Slot::Jongseong => {
                    // 초성 항목이 먼저 등록되어 있으므로 종성 인덱스만 채움
                    if let Some(Jamo::Consonant { jong_index, .. }) = by_key.get_mut(&key) {
                        *jong_index = Some(entry.index);
                    }
                }
            }
        }

        Self {
            entries,
            by_slot,
            by_jamo,
            by_key,
        }
    }

    /// 전체 항목
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// 슬롯 인덱스 -> 입력 키
    /// 종성 없음(0)은 항목이 없으므로 None
    pub fn keys_for(&self, slot: Slot, index: u32) -> Option<&'static str> {
        self.by_slot
            .get(&(slot, index))
            .map(|&pos| self.entries[pos].keys)
    }

    /// 호환용 자모 -> 입력 키
    pub fn keys_for_jamo(&self, jamo: char) -> Option<&'static str> {
        self.by_jamo.get(&jamo).map(|&pos| self.entries[pos].keys)
    }

    /// 영문 키 -> 자모
    ///
    /// Shift 배치가 없는 대문자(K, X 등)는 소문자 키로 취급합니다.
    /// 두벌식 자판에서 Shift+K도 ㅏ를 입력하기 때문입니다.
    pub fn jamo_for_key(&self, key: char) -> Option<Jamo> {
        self.by_key
            .get(&key)
            .or_else(|| {
                if key.is_ascii_uppercase() {
                    self.by_key.get(&key.to_ascii_lowercase())
                } else {
                    None
                }
            })
            .copied()
    }
}

/// 영문 문자 하나를 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
pub fn map_to_jamo(c: char) -> Option<Jamo> {
    LAYOUT.jamo_for_key(c)
}
