//! 초성 추출
//!
//! "한글" -> "ㅎㄱ" 처럼 음절마다 초성만 남깁니다.
//! 입력에 원래 있던 낱자음/낱모음은 옵션에 따라 제거할 수 있습니다.

use crate::core::unicode::{
    choseong_to_jamo_char, decompose_syllable, is_compat_consonant, is_compat_vowel,
};

/// 초성 추출기 설정
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChoseongExtractor {
    /// 낱자음(ㄱ, ㄴ ...) 제거
    pub remove_single_jaeum: bool,
    /// 낱모음(ㅏ, ㅑ ...) 제거
    pub remove_single_moeum: bool,
}

impl ChoseongExtractor {
    pub fn new(remove_single_jaeum: bool, remove_single_moeum: bool) -> Self {
        Self {
            remove_single_jaeum,
            remove_single_moeum,
        }
    }

    /// 문자열에서 초성만 추출
    ///
    /// # Examples
    /// ```
    /// use korean_ac::core::choseong::ChoseongExtractor;
    /// let extractor = ChoseongExtractor::new(false, false);
    /// assert_eq!(extractor.extract("한글 검색"), "ㅎㄱ ㄱㅅ");
    /// ```
    pub fn extract(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());

        for c in input.chars() {
            if let Ok((cho, _, _)) = decompose_syllable(c) {
                if let Some(jamo) = choseong_to_jamo_char(cho) {
                    result.push(jamo);
                }
            } else if is_compat_consonant(c) {
                if !self.remove_single_jaeum {
                    result.push(c);
                }
            } else if is_compat_vowel(c) {
                if !self.remove_single_moeum {
                    result.push(c);
                }
            } else {
                result.push(c);
            }
        }

        result
    }
}
