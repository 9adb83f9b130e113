//! Line screening
//!
//! Reads `<kind> <payload>` lines, validates each payload and writes one
//! verdict line per input.

use std::fmt;
use std::io;

use log::{info, warn};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::scenarios::InputKind;
use crate::error::ValidationError;
use crate::error::handlers::handle_error;

/// Verdict for a single screened line
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass { kind: InputKind, value: String },
    Blocked { kind: InputKind, error: ValidationError },
    UnknownKind(String),
}

impl Verdict {
    pub fn is_security_violation(&self) -> bool {
        matches!(self, Verdict::Blocked { error, .. } if error.is_security_violation())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass { kind, value } => write!(f, "PASS {} {}", kind.tag(), value),
            Verdict::Blocked { kind, error } => write!(f, "BLOCKED {} {}", kind.tag(), error),
            Verdict::UnknownKind(tag) => write!(f, "BLOCKED ? unknown input kind: {}", tag),
        }
    }
}

/// Counts from a screening run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSummary {
    pub passed: usize,
    pub blocked: usize,
    pub violations: usize,
}

/// Amounts arrive as text. Plain decimal integers (leading zeros allowed)
/// are tried first, then JSON; anything else stays a string and fails the
/// integer type check.
fn parse_amount(payload: &str) -> Value {
    let payload = payload.trim();
    if let Ok(n) = payload.parse::<i64>() {
        return Value::from(n);
    }
    serde_json::from_str(payload).unwrap_or_else(|_| Value::String(payload.to_string()))
}

/// Screen one input line. Returns `None` for blank lines.
pub fn screen_line(line: &str) -> Option<Verdict> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return None;
    }

    let (tag, payload) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let Some(kind) = InputKind::from_tag(tag) else {
        return Some(Verdict::UnknownKind(tag.to_string()));
    };

    let input = match kind {
        InputKind::ResourceAllocation => parse_amount(payload),
        _ => Value::String(payload.to_string()),
    };

    Some(match kind.validate(&input) {
        Ok(value) => Verdict::Pass { kind, value },
        Err(error) => Verdict::Blocked { kind, error },
    })
}

/// Screen every line from `reader`, writing verdicts to `writer`.
///
/// With `stop_on_violation` set, screening ends after the first security
/// violation has been reported.
pub async fn screen<R, W>(reader: R, mut writer: W, stop_on_violation: bool) -> io::Result<ScreenSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = ScreenSummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let Some(verdict) = screen_line(&line) else {
            continue;
        };

        match &verdict {
            Verdict::Pass { .. } => summary.passed += 1,
            Verdict::Blocked { kind, error } => {
                summary.blocked += 1;
                if error.is_security_violation() {
                    summary.violations += 1;
                }
                handle_error(kind.tag(), error);
            }
            Verdict::UnknownKind(tag) => {
                summary.blocked += 1;
                warn!("Unknown input kind: {}", tag);
            }
        }

        writer.write_all(format!("{}\n", verdict).as_bytes()).await?;

        if stop_on_violation && verdict.is_security_violation() {
            info!("Stopping after security violation");
            break;
        }
    }

    writer
        .write_all(
            format!(
                "screened {} inputs: {} passed, {} blocked, {} security violations\n",
                summary.passed + summary.blocked,
                summary.passed,
                summary.blocked,
                summary.violations
            )
            .as_bytes(),
        )
        .await?;
    writer.flush().await?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_screen_line_verdicts() {
        assert_eq!(
            screen_line("id  auth-system-01 "),
            Some(Verdict::Pass {
                kind: InputKind::SystemIdentifier,
                value: "auth-system-01".to_string()
            })
        );
        assert_eq!(
            screen_line("amount 1.5"),
            Some(Verdict::Blocked {
                kind: InputKind::ResourceAllocation,
                error: FormatError::NotAnInteger.into()
            })
        );
        assert_eq!(
            screen_line("amount lots"),
            Some(Verdict::Blocked {
                kind: InputKind::ResourceAllocation,
                error: FormatError::NotAnInteger.into()
            })
        );
        assert_eq!(
            screen_line("msg"),
            Some(Verdict::Blocked {
                kind: InputKind::CoordinationMessage,
                error: FormatError::EmptyMessage.into()
            })
        );
        assert_eq!(
            screen_line("blob data"),
            Some(Verdict::UnknownKind("blob".to_string()))
        );
        assert_eq!(screen_line("   \r\n"), None);
    }

    #[test]
    fn test_screen_line_tab_separated() {
        assert_eq!(
            screen_line("id\tnode-01"),
            Some(Verdict::Pass {
                kind: InputKind::SystemIdentifier,
                value: "node-01".to_string()
            })
        );
    }

    #[test]
    fn test_screen_line_amount_leading_zeros() {
        assert_eq!(
            screen_line("amount 00500").unwrap().to_string(),
            "PASS amount 500"
        );
        assert_eq!(
            screen_line("amount -007"),
            Some(Verdict::Blocked {
                kind: InputKind::ResourceAllocation,
                error: FormatError::NegativeAmount(-7).into()
            })
        );
        assert_eq!(
            screen_line("amount 99999999999999999999"),
            Some(Verdict::Blocked {
                kind: InputKind::ResourceAllocation,
                error: FormatError::NotAnInteger.into()
            })
        );
    }

    #[test]
    fn test_verdict_display() {
        let verdict = screen_line("msg javascript:alert(1)").unwrap();
        assert!(verdict.is_security_violation());
        assert_eq!(
            verdict.to_string(),
            "BLOCKED msg Dangerous pattern detected: javascript:"
        );
        assert_eq!(
            screen_line("amount 500").unwrap().to_string(),
            "PASS amount 500"
        );
    }

    #[tokio::test]
    async fn test_screen_counts_and_output() {
        let input = b"id node-1\n\nmsg hello there\nmsg <script>x</script>\namount -3\n" as &[u8];
        let mut output = Vec::new();

        let summary = screen(input, &mut output, false).await.unwrap();
        assert_eq!(
            summary,
            ScreenSummary {
                passed: 2,
                blocked: 2,
                violations: 1
            }
        );

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "PASS id node-1");
        assert_eq!(lines[1], "PASS msg hello there");
        assert_eq!(lines[2], "BLOCKED msg Dangerous pattern detected: <script");
        assert_eq!(lines[3], "BLOCKED amount Resource amount cannot be negative: -3");
        assert_eq!(
            lines[4],
            "screened 4 inputs: 2 passed, 2 blocked, 1 security violations"
        );
    }

    #[tokio::test]
    async fn test_screen_stops_on_violation() {
        let input = b"msg exec(rm -rf)\nid node-2\n" as &[u8];
        let mut output = Vec::new();

        let summary = screen(input, &mut output, true).await.unwrap();
        assert_eq!(summary.violations, 1);
        assert_eq!(summary.passed, 0);
        assert!(!String::from_utf8(output).unwrap().contains("node-2"));
    }
}
