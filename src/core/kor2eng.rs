//! 한글 -> 영문 역변환 (두벌식 자판 기준)
//!
//! 완성형 한글을 두벌식 자판의 영문 키 시퀀스로 역변환합니다.
//! 복합 모음과 겹받침은 두 키로 풀어 씁니다.

use crate::core::layout::LAYOUT;
use crate::core::unicode::{decompose_syllable, is_compat_consonant, is_compat_vowel, Slot};

/// 한글 문자열을 두벌식 영문 키 시퀀스로 역변환
///
/// `convert_single_letter`가 true면 낱자모(ㄱ, ㅏ 등)도 키로 바꾸고,
/// false면 그대로 둡니다. 한글이 아닌 문자는 항상 그대로 유지됩니다.
///
/// # Examples
/// ```
/// use korean_ac::core::kor2eng::convert;
/// assert_eq!(convert("안녕", false), "dkssud");
/// assert_eq!(convert("한글ㅋ", false), "gksrmfㅋ");
/// assert_eq!(convert("한글ㅋ", true), "gksrmfz");
/// ```
pub fn convert(input: &str, convert_single_letter: bool) -> String {
    let mut result = String::with_capacity(input.len() * 3);

    for c in input.chars() {
        if let Ok((cho, jung, jong)) = decompose_syllable(c) {
            push_syllable_keys(c, cho, jung, jong, &mut result);
        } else if convert_single_letter && (is_compat_consonant(c) || is_compat_vowel(c)) {
            match LAYOUT.keys_for_jamo(c) {
                Some(keys) => result.push_str(keys),
                None => {
                    log::warn!("배치표에 없는 자모: {}", c);
                    result.push(c);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// 음절 하나를 초성 -> 중성 -> 종성 순서의 키로 변환
/// 배치표에 빠진 항목이 있으면 원래 음절을 그대로 씀
fn push_syllable_keys(c: char, cho: u32, jung: u32, jong: u32, result: &mut String) {
    let cho_keys = LAYOUT.keys_for(Slot::Choseong, cho);
    let jung_keys = LAYOUT.keys_for(Slot::Jungseong, jung);
    let jong_keys = if jong == 0 {
        Some("")
    } else {
        LAYOUT.keys_for(Slot::Jongseong, jong)
    };

    match (cho_keys, jung_keys, jong_keys) {
        (Some(cho), Some(jung), Some(jong)) => {
            result.push_str(cho);
            result.push_str(jung);
            result.push_str(jong);
        }
        _ => {
            log::warn!("배치표에 없는 음절 구성: {} ({}, {}, {})", c, cho, jung, jong);
            result.push(c);
        }
    }
}
