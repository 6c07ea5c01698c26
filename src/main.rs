//! korean-ac - 한글 자동완성 후보 생성기
//!
//! 사용법: korean-ac <config.json> < documents.ndjson
//!
//! 표준 입력의 한 줄당 JSON 문서 하나를 읽어 프로세서를 적용하고
//! 결과 문서를 한 줄씩 표준 출력에 씁니다.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use korean_ac::{CompletionProcessor, ProcessorConfig};
use serde_json::Value;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(config_path) = std::env::args().nth(1) else {
        eprintln!("사용법: korean-ac <config.json> < documents.ndjson");
        return ExitCode::from(2);
    };

    let config = match ProcessorConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("설정 로드 실패 ({}): {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };
    let processor = CompletionProcessor::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&processor, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("입출력 오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 입력의 문서를 한 줄씩 처리해 출력에 기록
///
/// 빈 줄은 건너뛰고, 객체가 아니거나 파싱할 수 없는 줄은 그대로 출력합니다.
fn run<R: BufRead, W: Write>(
    processor: &CompletionProcessor,
    input: R,
    mut out: W,
) -> io::Result<()> {
    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(mut document)) => {
                processor.execute(&mut document);
                serde_json::to_writer(&mut out, &document)?;
                out.write_all(b"\n")?;
            }
            Ok(_) => {
                log::warn!("{}번째 줄: JSON 객체가 아님, 그대로 출력", line_no + 1);
                writeln!(out, "{}", line)?;
            }
            Err(e) => {
                log::warn!("{}번째 줄: JSON 파싱 실패 ({}), 그대로 출력", line_no + 1, e);
                writeln!(out, "{}", line)?;
            }
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use korean_ac::CompletionOptions;

    fn run_lines(input: &str) -> Vec<String> {
        let processor = CompletionProcessor::new(ProcessorConfig::new(
            "title",
            "title_ac",
            CompletionOptions::new().with_choseong(true),
        ));
        let mut out = Vec::new();
        run(&processor, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_run_processes_objects() {
        let lines = run_lines("{\"title\": \"한국\"}\n");
        assert_eq!(lines.len(), 1);
        let document: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(document["title"], "한국");
        assert_eq!(document["title_ac"], serde_json::json!(["ㄱ", "ㅎㄱ"]));
    }

    #[test]
    fn test_run_skips_blank_and_echoes_bad_lines() {
        let input = "\n   \n[1,2]\n{not json\n{\"title\": \"가\"}\n";
        let lines = run_lines(input);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[1,2]");
        assert_eq!(lines[1], "{not json");
        let document: Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(document["title_ac"], serde_json::json!(["ㄱ"]));
    }

    #[test]
    fn test_run_empty_input() {
        assert!(run_lines("").is_empty());
    }
}
