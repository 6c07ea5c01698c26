//! 접미 부분 문자열 확장
//!
//! 자동완성에서 단어 중간부터 검색해도 걸리도록
//! 앞에서부터 한 글자씩 떼어 낸 문자열을 모두 만듭니다.
//! "abc" -> ["abc", "bc", "c"]

/// 모든 접미사를 긴 것부터 순서대로 돌려주는 반복자
///
/// 글자(char) 경계 기준이며, 빈 문자열이면 아무것도 내지 않습니다.
pub fn suffixes(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices().map(move |(offset, _)| &text[offset..])
}

/// 모든 접미사를 소유 문자열로 수집
pub fn expand(text: &str) -> Vec<String> {
    suffixes(text).map(str::to_owned).collect()
}
