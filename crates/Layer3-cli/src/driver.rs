//! Driver - stdin에서 `이름 정수 정수` 트리플을 읽어 레지스트리 호출
//!
//! 토큰은 줄 경계와 무관하게 공백으로 구분되며, 3개씩 묶어 처리합니다.
//! - 결과: stdout
//! - 조회 실패 / 연산 실패 / 잘못된 정수: stderr (기본: 계속 진행)

use dyncall_core::ArithmeticRegistry;
use dyncall_foundation::{DriverConfig, Error, Result};
use std::collections::VecDeque;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// 처리 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverSummary {
    /// 처리한 트리플 수
    pub processed: usize,
    /// 성공
    pub succeeded: usize,
    /// 실패 (조회 실패, 연산 실패, 잘못된 입력)
    pub failed: usize,
    /// `stop_on_error`로 중단됨
    pub stopped: bool,
}

/// 입력 루프
pub struct Driver<'a> {
    registry: &'a ArithmeticRegistry,
    config: DriverConfig,
}

impl<'a> Driver<'a> {
    pub fn new(registry: &'a ArithmeticRegistry, config: DriverConfig) -> Self {
        Self { registry, config }
    }

    /// EOF까지 입력 처리
    pub async fn run<R, O, E>(&self, input: R, out: &mut O, err: &mut E) -> Result<DriverSummary>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        let mut summary = DriverSummary::default();
        let mut pending: VecDeque<String> = VecDeque::new();
        let mut segments = input.split(b'\n');
        let mut line_no = 0usize;

        while let Some(segment) = segments.next_segment().await? {
            line_no += 1;
            let line = match String::from_utf8(segment) {
                Ok(line) => line,
                Err(_) => {
                    // 깨진 줄은 트리플 하나로 취급하지 않고 줄 단위로 버림
                    let bad = Error::InvalidInput(format!("line {} is not valid UTF-8", line_no));
                    if self.report_failure(&mut summary, err, "<invalid utf-8>", &bad.to_string())? {
                        return Ok(summary);
                    }
                    continue;
                }
            };
            pending.extend(line.split_whitespace().map(str::to_string));

            while pending.len() >= 3 {
                let (name, a, b) = match (pending.pop_front(), pending.pop_front(), pending.pop_front()) {
                    (Some(name), Some(a), Some(b)) => (name, a, b),
                    _ => break,
                };

                summary.processed += 1;
                match self.dispatch(&name, &a, &b) {
                    Ok(value) => {
                        summary.succeeded += 1;
                        writeln!(out, "{}", value)?;
                    }
                    Err(message) => {
                        if self.report_failure(&mut summary, err, &name, &message)? {
                            return Ok(summary);
                        }
                    }
                }
            }
        }

        if !pending.is_empty() {
            let leftover: Vec<String> = pending.into_iter().collect();
            warn!("Ignoring incomplete input at EOF: {:?}", leftover);
            writeln!(
                err,
                "{}",
                Error::InvalidInput(format!("incomplete triple at end of input: {}", leftover.join(" ")))
            )?;
        }

        info!(
            "Processed {} calls ({} ok, {} failed)",
            summary.processed, summary.succeeded, summary.failed
        );
        Ok(summary)
    }

    /// 실패 기록 + stderr 출력. 중단해야 하면 true
    fn report_failure<E: Write>(
        &self,
        summary: &mut DriverSummary,
        err: &mut E,
        name: &str,
        message: &str,
    ) -> Result<bool> {
        summary.failed += 1;
        writeln!(err, "{}", message)?;

        if self.config.stop_on_error {
            warn!("Stopping after failure on '{}'", name);
            summary.stopped = true;
        }
        Ok(summary.stopped)
    }

    /// 트리플 하나 처리 - 실패는 사용자에게 보여줄 메시지로 반환
    fn dispatch(&self, name: &str, a: &str, b: &str) -> std::result::Result<i64, String> {
        let a = parse_operand(a).map_err(|e| e.to_string())?;
        let b = parse_operand(b).map_err(|e| e.to_string())?;

        debug!("{}({}, {})", name, a, b);
        match self.registry.invoke(name, (a, b)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(callee_err)) => Err(callee_err.to_string()),
            Err(lookup_err) => Err(lookup_err.to_string()),
        }
    }
}

fn parse_operand(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not an integer", token)))
}
