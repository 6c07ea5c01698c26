//! 자모 분리
//!
//! 음절을 초성 + 중성 (+ 종성) 호환용 자모로 풀어 씁니다.
//! 복합 모음(ㅘ)과 겹받침(ㄺ)은 한 글자로 유지됩니다.

use crate::core::unicode::{
    choseong_to_jamo_char, decompose_syllable, jongseong_to_jamo_char, jungseong_to_jamo_char,
};

/// 문자열을 자모 단위로 분리
///
/// # Examples
/// ```
/// use korean_ac::core::jamo::decompose;
/// assert_eq!(decompose("한"), "ㅎㅏㄴ");
/// assert_eq!(decompose("가a"), "ㄱㅏa");
/// ```
pub fn decompose(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);

    for c in input.chars() {
        match decompose_syllable(c) {
            Ok((cho, jung, jong)) => {
                result.extend(choseong_to_jamo_char(cho));
                result.extend(jungseong_to_jamo_char(jung));
                // 종성 없음(0)이면 아무것도 추가되지 않음
                result.extend(jongseong_to_jamo_char(jong));
            }
            Err(_) => result.push(c),
        }
    }

    result
}
