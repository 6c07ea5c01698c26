//! 자동완성 후보 집계
//!
//! 활성화된 변환(초성, 자모, 한->영, 영->한)을 입력에 적용하고,
//! 각 결과의 모든 접미사를 하나의 중복 없는 집합으로 모읍니다.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::lenient_bool;
use crate::core::choseong::ChoseongExtractor;
use crate::core::suffix::suffixes;
use crate::core::{eng2kor, jamo, kor2eng};

/// 변환 활성화 여부와 변환별 옵션 (모두 기본값 false)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompletionOptions {
    /// 초성 추출
    #[serde(deserialize_with = "lenient_bool")]
    pub choseong: bool,
    /// 자모 분리
    #[serde(deserialize_with = "lenient_bool")]
    pub jamo: bool,
    /// 한글 -> 영문 키
    #[serde(deserialize_with = "lenient_bool")]
    pub kor2eng: bool,
    /// 영문 키 -> 한글
    #[serde(deserialize_with = "lenient_bool")]
    pub eng2kor: bool,
    /// 초성 추출 시 낱자음 제거
    #[serde(deserialize_with = "lenient_bool")]
    pub remove_single_jaeum: bool,
    /// 초성 추출 시 낱모음 제거
    #[serde(deserialize_with = "lenient_bool")]
    pub remove_single_moeum: bool,
    /// 한->영, 영->한 변환 시 낱자모도 변환
    #[serde(deserialize_with = "lenient_bool")]
    pub convert_single_korean_letter: bool,
}

impl CompletionOptions {
    /// 새 설정 생성 (모든 변환 비활성)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choseong(mut self, enabled: bool) -> Self {
        self.choseong = enabled;
        self
    }

    pub fn with_jamo(mut self, enabled: bool) -> Self {
        self.jamo = enabled;
        self
    }

    pub fn with_kor2eng(mut self, enabled: bool) -> Self {
        self.kor2eng = enabled;
        self
    }

    pub fn with_eng2kor(mut self, enabled: bool) -> Self {
        self.eng2kor = enabled;
        self
    }

    pub fn with_remove_single_jaeum(mut self, enabled: bool) -> Self {
        self.remove_single_jaeum = enabled;
        self
    }

    pub fn with_remove_single_moeum(mut self, enabled: bool) -> Self {
        self.remove_single_moeum = enabled;
        self
    }

    pub fn with_convert_single_korean_letter(mut self, enabled: bool) -> Self {
        self.convert_single_korean_letter = enabled;
        self
    }

    /// 변환이 하나라도 켜져 있는지
    pub fn any_enabled(&self) -> bool {
        self.choseong || self.jamo || self.kor2eng || self.eng2kor
    }
}

/// 중복 없는 자동완성 후보 집합
///
/// 순회 순서에는 의미가 없습니다.
/// 현재 구현은 정렬 순서로 순회하지만 호출자는 이에 의존하면 안 됩니다.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletionSet {
    candidates: BTreeSet<String>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 후보 하나 추가, 새로 들어갔으면 true
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        self.candidates.insert(candidate.into())
    }

    /// 문자열의 모든 접미사를 후보로 추가
    pub fn insert_suffixes(&mut self, text: &str) {
        for suffix in suffixes(text) {
            if !self.candidates.contains(suffix) {
                self.candidates.insert(suffix.to_owned());
            }
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.candidates.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.candidates.into_iter().collect()
    }
}

impl IntoIterator for CompletionSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

/// 입력 문자열의 자동완성 후보 생성
///
/// 켜진 변환마다 결과를 만들고 그 접미사들을 모두 합칩니다.
/// 켜진 변환이 없으면 빈 집합입니다.
///
/// # Examples
/// ```
/// use korean_ac::core::completion::{generate_completions, CompletionOptions};
///
/// let options = CompletionOptions::new().with_choseong(true);
/// let set = generate_completions("한국", &options);
/// assert!(set.contains("ㅎㄱ"));
/// assert!(set.contains("ㄱ"));
/// ```
pub fn generate_completions(text: &str, options: &CompletionOptions) -> CompletionSet {
    let mut set = CompletionSet::new();

    // 1. 초성 분리
    if options.choseong {
        let extractor =
            ChoseongExtractor::new(options.remove_single_jaeum, options.remove_single_moeum);
        set.insert_suffixes(&extractor.extract(text));
    }
    // 2. 자모 분리
    if options.jamo {
        set.insert_suffixes(&jamo::decompose(text));
    }
    // 3. 한타 -> 영타
    if options.kor2eng {
        set.insert_suffixes(&kor2eng::convert(text, options.convert_single_korean_letter));
    }
    // 4. 영타 -> 한타
    if options.eng2kor {
        set.insert_suffixes(&eng2kor::convert(text, options.convert_single_korean_letter));
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_enabled() -> CompletionOptions {
        CompletionOptions::new()
            .with_choseong(true)
            .with_jamo(true)
            .with_kor2eng(true)
            .with_eng2kor(true)
    }

    #[test]
    fn test_no_gates_is_empty() {
        let options = CompletionOptions::new();
        assert!(!options.any_enabled());
        assert!(generate_completions("한국", &options).is_empty());
        assert!(generate_completions("", &options).is_empty());
    }

    #[test]
    fn test_choseong_only() {
        let options = CompletionOptions::new().with_choseong(true);
        let set = generate_completions("한국", &options);
        assert_eq!(set.into_vec(), vec!["ㄱ", "ㅎㄱ"]);
    }

    #[test]
    fn test_jamo_only() {
        let options = CompletionOptions::new().with_jamo(true);
        let set = generate_completions("한", &options);
        assert_eq!(set.len(), 3);
        assert!(set.contains("ㅎㅏㄴ"));
        assert!(set.contains("ㅏㄴ"));
        assert!(set.contains("ㄴ"));
    }

    #[test]
    fn test_kor2eng_only() {
        let options = CompletionOptions::new().with_kor2eng(true);
        let set = generate_completions("한", &options);
        assert_eq!(set.into_vec(), vec!["gks", "ks", "s"]);
    }

    #[test]
    fn test_eng2kor_only() {
        let options = CompletionOptions::new().with_eng2kor(true);
        let set = generate_completions("gksrmf", &options);
        assert_eq!(set.into_vec(), vec!["글", "한글"]);
    }

    #[test]
    fn test_deduplicates_across_transformations() {
        // 한글이 없는 입력은 초성/자모/한->영 결과가 모두 원문과 같음
        let options = CompletionOptions::new()
            .with_choseong(true)
            .with_jamo(true)
            .with_kor2eng(true);
        let set = generate_completions("abc", &options);
        assert_eq!(set.into_vec(), vec!["abc", "bc", "c"]);

        // 초성 "ㄱ"과 자모 "ㄱㅏㄱ"의 마지막 접미사 "ㄱ"이 겹침
        let options = CompletionOptions::new().with_choseong(true).with_jamo(true);
        let set = generate_completions("각", &options);
        assert_eq!(set.into_vec(), vec!["ㄱ", "ㄱㅏㄱ", "ㅏㄱ"]);
    }

    #[test]
    fn test_all_gates() {
        let set = generate_completions("한글", &all_enabled());
        for expected in ["ㅎㄱ", "ㄱ", "ㅎㅏㄴㄱㅡㄹ", "ㄹ", "gksrmf", "rmf", "한글", "글"] {
            assert!(set.contains(expected), "{}", expected);
        }
    }

    #[test]
    fn test_single_letter_option_flows_through() {
        let options = CompletionOptions::new()
            .with_kor2eng(true)
            .with_convert_single_korean_letter(true);
        let set = generate_completions("ㅋ", &options);
        assert_eq!(set.into_vec(), vec!["z"]);

        let options = CompletionOptions::new().with_kor2eng(true);
        let set = generate_completions("ㅋ", &options);
        assert_eq!(set.into_vec(), vec!["ㅋ"]);
    }

    #[test]
    fn test_single_letter_option_reaches_eng2kor() {
        let options = CompletionOptions::new()
            .with_eng2kor(true)
            .with_convert_single_korean_letter(true);
        assert_eq!(generate_completions("r", &options).into_vec(), vec!["ㄱ"]);

        let options = CompletionOptions::new().with_eng2kor(true);
        assert_eq!(generate_completions("r", &options).into_vec(), vec!["r"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_completions("", &all_enabled()).is_empty());
    }

    #[test]
    fn test_set_insert() {
        let mut set = CompletionSet::new();
        assert!(set.insert("가"));
        assert!(!set.insert("가"));
        set.insert_suffixes("나가");
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().count(), 2);
    }
}
