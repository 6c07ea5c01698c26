//! 자동완성 후보 생성 프로세서
//!
//! 문서의 원문 필드를 읽어 후보 집합을 만들고 결과 필드에 기록합니다.
//! 문서 접근은 [`Document`] 트레이트로 주입받습니다.

use serde_json::{Map, Value};

use crate::config::ProcessorConfig;
use crate::core::completion::{generate_completions, CompletionSet};

/// 필드 읽기/쓰기 기능
///
/// 필드 경로는 `a.b.c` 처럼 점으로 중첩 객체를 가리킬 수 있습니다.
pub trait Document {
    /// 경로의 값 조회 (없으면 None)
    fn get_field(&self, path: &str) -> Option<&Value>;
    /// 경로에 값 저장 (기존 값은 교체)
    fn set_field(&mut self, path: &str, value: Value);
}

impl Document for Map<String, Value> {
    fn get_field(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    fn set_field(&mut self, path: &str, value: Value) {
        let (parents, leaf) = match path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, path),
        };

        let mut current = self;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            let slot = current
                .entry(part.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            // 중간 경로가 객체가 아니면 빈 객체로 교체
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(map) = slot else {
                return;
            };
            current = map;
        }
        current.insert(leaf.to_owned(), value);
    }
}

/// 한글 자동완성 후보 분리 프로세서
#[derive(Debug, Clone)]
pub struct CompletionProcessor {
    config: ProcessorConfig,
}

impl CompletionProcessor {
    /// 프로세서 타입 이름
    pub const TYPE: &'static str = "korean_auto_complete_completion_splitter";

    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// 문자열 하나에 대한 후보 생성
    pub fn process(&self, text: &str) -> CompletionSet {
        generate_completions(text, &self.config.options)
    }

    /// 문서 처리
    ///
    /// 원문 필드가 없거나 문자열이 아니면, 또는 켜진 변환이 없으면
    /// 문서를 건드리지 않고 false를 반환합니다.
    pub fn execute<D: Document + ?Sized>(&self, document: &mut D) -> bool {
        let tag = self.config.tag.as_deref().unwrap_or(Self::TYPE);

        if !self.config.options.any_enabled() {
            log::debug!("[{}] 활성화된 변환 없음, 문서 유지", tag);
            return false;
        }

        let text = match document.get_field(&self.config.target_field) {
            Some(Value::String(text)) => text,
            Some(_) => {
                log::debug!(
                    "[{}] {} 필드가 문자열이 아님, 문서 유지",
                    tag,
                    self.config.target_field
                );
                return false;
            }
            None => {
                log::debug!("[{}] {} 필드 없음, 문서 유지", tag, self.config.target_field);
                return false;
            }
        };

        let completions = self.process(text);
        log::debug!(
            "[{}] {} -> {} 후보 {}개",
            tag,
            self.config.target_field,
            self.config.completion_field,
            completions.len()
        );

        let values = completions.into_iter().map(Value::String).collect();
        document.set_field(&self.config.completion_field, Value::Array(values));
        true
    }
}
