//! 프로세서 설정 로드 (JSON)

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::completion::CompletionOptions;

/// 허용되는 설정 키
const KNOWN_FIELDS: &[&str] = &[
    "tag",
    "description",
    "target_field",
    "completion_field",
    "choseong",
    "jamo",
    "kor2eng",
    "eng2kor",
    "remove_single_jaeum",
    "remove_single_moeum",
    "convert_single_korean_letter",
];

/// 설정 로드/검증 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 필수 항목 누락
    MissingField(&'static str),
    /// 항목 값 오류
    InvalidField { field: &'static str, reason: String },
    /// 지원하지 않는 설정 항목
    UnknownField(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 읽기 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 파싱 오류: {}", s),
            ConfigError::MissingField(field) => write!(f, "필수 설정 누락: {}", field),
            ConfigError::InvalidField { field, reason } => {
                write!(f, "잘못된 설정 값 {}: {}", field, reason)
            }
            ConfigError::UnknownField(field) => write!(f, "지원하지 않는 설정 항목: {}", field),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e.to_string())
    }
}

/// 자동완성 프로세서 설정
///
/// ```json
/// {
///   "target_field": "title",
///   "completion_field": "title_ac",
///   "choseong": true,
///   "kor2eng": "true"
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// 프로세서 태그 (로그 구분용)
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 원문을 읽을 필드 (점으로 중첩 경로 지정)
    #[serde(default)]
    pub target_field: String,
    /// 후보 목록을 쓸 필드
    #[serde(default)]
    pub completion_field: String,
    /// 변환 on/off 및 옵션
    #[serde(flatten)]
    pub options: CompletionOptions,
}

impl ProcessorConfig {
    /// 필드명과 옵션으로 설정 생성
    pub fn new(
        target_field: impl Into<String>,
        completion_field: impl Into<String>,
        options: CompletionOptions,
    ) -> Self {
        Self {
            tag: None,
            description: None,
            target_field: target_field.into(),
            completion_field: completion_field.into(),
            options,
        }
    }

    /// JSON 문자열에서 설정 로드
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;
        Self::from_json_value(value)
    }

    /// serde_json::Value에서 설정 로드
    ///
    /// 오타 등 알 수 없는 키는 조용히 무시하지 않고 에러로 처리합니다.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if let Some(object) = value.as_object() {
            if let Some(unknown) = object.keys().find(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
                return Err(ConfigError::UnknownField(unknown.clone()));
            }
        }
        let config: ProcessorConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 파일 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 필수 항목 검증
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_field_name("target_field", &self.target_field)?;
        check_field_name("completion_field", &self.completion_field)?;
        Ok(())
    }
}

fn check_field_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingField(field));
    }
    if value.split('.').any(str::is_empty) {
        return Err(ConfigError::InvalidField {
            field,
            reason: format!("빈 경로 구간이 있습니다: {:?}", value),
        });
    }
    Ok(())
}

/// bool 또는 문자열 bool 허용
///
/// 문자열은 대소문자 무관 "true"만 true, 나머지는 모두 false
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    Ok(match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => b,
        BoolOrString::Str(s) => s.eq_ignore_ascii_case("true"),
    })
}
