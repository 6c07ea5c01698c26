//! 영문 -> 한글 통합 변환기

use crate::core::hangul_fsm::HangulFsm;

/// 영문 키 시퀀스를 두벌식 자판으로 입력했을 때의 한글로 변환
///
/// 변환할 수 없는 문자(숫자, 특수문자, 한글, 낱자모)는 그대로 유지하며
/// 음절 경계로 취급합니다.
/// `convert_single_letter`가 false면 음절을 이루지 못한 키는 영문 그대로 남깁니다.
///
/// # Examples
/// ```
/// use korean_ac::core::eng2kor::convert;
/// assert_eq!(convert("gksrmf", true), "한글");
/// assert_eq!(convert("r", true), "ㄱ");
/// assert_eq!(convert("r", false), "r");
/// ```
pub fn convert(input: &str, convert_single_letter: bool) -> String {
    let mut fsm = HangulFsm::with_single_letter(convert_single_letter);

    for c in input.chars() {
        fsm.feed_key(c);
    }

    fsm.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("rkskek", true), "가나다");
        assert_eq!(convert("dkssudgktpdy", true), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert("gksrmf", true), "한글");
        assert_eq!(convert("dkswl", true), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(convert("dhksfy", true), "완료");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dlfr", true), "읽");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(convert("Tks", true), "싼");
        assert_eq!(convert("Rk", true), "까");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123rksk", true), "123가나");
        assert_eq!(convert("rk!sk", true), "가!나");
    }

    #[test]
    fn test_uppercase_without_shift_mapping() {
        assert_eq!(convert("GKSDML", true), "한의");
        assert_eq!(convert("Xk", true), "타");
    }

    #[test]
    fn test_uppercase_with_shift_mapping() {
        // R은 Shift 배치(ㄲ)가 있으므로 소문자로 내려가지 않음
        assert_eq!(convert("GKSRMF", true), "한끌");
        assert_eq!(convert("Rk", true), "까");
    }

    #[test]
    fn test_korean_input_passthrough() {
        assert_eq!(convert("한글", true), "한글");
        assert_eq!(convert("한글", false), "한글");
    }

    #[test]
    fn test_single_letter_option() {
        assert_eq!(convert("rt", true), "ㄱㅅ");
        assert_eq!(convert("rt", false), "rt");
        assert_eq!(convert("rk r", false), "가 r");
    }

    #[test]
    fn test_single_letter_kept_as_typed_key() {
        // 음절을 이루지 못한 키는 입력한 영문 그대로
        assert_eq!(convert("r", false), "r");
        assert_eq!(convert("k", false), "k");
        assert_eq!(convert("Hello", false), "H디lo");
        assert_eq!(convert("k", true), "ㅏ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert("", true), "");
        assert_eq!(convert("", false), "");
    }

    #[test]
    fn test_jongseong_split() {
        assert_eq!(convert("rkrkrl", true), "가가기");
    }
}
