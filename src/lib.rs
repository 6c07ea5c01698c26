//! 한글 자동완성 색인용 후보 문자열 생성
//!
//! 입력 문자열 하나로부터 다음 변환 결과와 그 모든 접미사를 만듭니다.
//!
//! - 초성 추출: "한글" -> "ㅎㄱ"
//! - 자모 분리: "한글" -> "ㅎㅏㄴㄱㅡㄹ"
//! - 한->영 자판 변환: "한글" -> "gksrmf"
//! - 영->한 자판 변환: "gksrmf" -> "한글"
//!
//! ```
//! use korean_ac::{generate_completions, CompletionOptions};
//!
//! let options = CompletionOptions::new().with_choseong(true).with_kor2eng(true);
//! let set = generate_completions("한글", &options);
//! assert!(set.contains("ㅎㄱ"));
//! assert!(set.contains("rmf"));
//! ```

pub mod config;
pub mod core;
pub mod processor;

pub use crate::config::{ConfigError, ProcessorConfig};
pub use crate::core::completion::{generate_completions, CompletionOptions, CompletionSet};
pub use crate::processor::{CompletionProcessor, Document};
