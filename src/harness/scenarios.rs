//! Demonstration scenarios
//!
//! Pairs an untyped input with the validator it should go through and
//! renders a pass/blocked line per scenario.

use std::fmt;
use std::io::{self, Write};

use log::info;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ValidationError;
use crate::error::handlers::handle_error;
use crate::validation::{
    validate_coordination_message, validate_resource_allocation, validate_system_identifier,
};

/// Which validator an input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    SystemIdentifier,
    CoordinationMessage,
    ResourceAllocation,
}

impl InputKind {
    /// Run the matching validator and return the validated value as text
    pub fn validate(self, input: &Value) -> Result<String, ValidationError> {
        match self {
            InputKind::SystemIdentifier => Ok(validate_system_identifier(input)?.into_inner()),
            InputKind::CoordinationMessage => {
                Ok(validate_coordination_message(input)?.into_inner())
            }
            InputKind::ResourceAllocation => {
                Ok(validate_resource_allocation(input)?.to_string())
            }
        }
    }

    /// Short tag used on the screening command line
    pub fn tag(self) -> &'static str {
        match self {
            InputKind::SystemIdentifier => "id",
            InputKind::CoordinationMessage => "msg",
            InputKind::ResourceAllocation => "amount",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "id" => Some(InputKind::SystemIdentifier),
            "msg" => Some(InputKind::CoordinationMessage),
            "amount" => Some(InputKind::ResourceAllocation),
            _ => None,
        }
    }
}

/// A described input and the validator it is checked against
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub kind: InputKind,
    pub input: Value,
}

impl Scenario {
    pub fn new(description: &str, kind: InputKind, input: Value) -> Self {
        Self {
            description: description.to_string(),
            kind,
            input,
        }
    }

    pub fn run(&self) -> Outcome {
        match self.kind.validate(&self.input) {
            Ok(value) => Outcome::Pass(value),
            Err(e) => Outcome::Blocked(e),
        }
    }
}

/// Result of running one scenario
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass(String),
    Blocked(ValidationError),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass(value) => write!(f, "PASS: {}", value),
            Outcome::Blocked(e) => write!(f, "BLOCKED: {}", e),
        }
    }
}

/// Counts from a demo run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub passed: usize,
    pub blocked: usize,
}

/// The six built-in scenarios: one valid and one rejected input per validator.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Valid system ID",
            InputKind::SystemIdentifier,
            json!("auth-system-01"),
        ),
        Scenario::new(
            "Invalid system ID",
            InputKind::SystemIdentifier,
            json!("invalid@system"),
        ),
        Scenario::new(
            "Valid coordination message",
            InputKind::CoordinationMessage,
            json!("coordination decision: allocate resources"),
        ),
        Scenario::new(
            "Dangerous message",
            InputKind::CoordinationMessage,
            json!("<script>alert('xss')</script>"),
        ),
        Scenario::new(
            "Valid resource allocation",
            InputKind::ResourceAllocation,
            json!(500),
        ),
        Scenario::new(
            "Negative resources",
            InputKind::ResourceAllocation,
            json!(-100),
        ),
    ]
}

/// Run every scenario, writing a report to `out`.
pub fn run_demo<W: Write>(scenarios: &[Scenario], out: &mut W) -> io::Result<DemoSummary> {
    info!("Running {} validation scenarios", scenarios.len());

    writeln!(out, "NEXUS PROTOCOL SECURITY TESTING")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let mut summary = DemoSummary::default();
    for scenario in scenarios {
        let outcome = scenario.run();
        match &outcome {
            Outcome::Pass(_) => summary.passed += 1,
            Outcome::Blocked(e) => {
                summary.blocked += 1;
                handle_error(&scenario.description, e);
            }
        }

        writeln!(out)?;
        writeln!(out, "{}:", scenario.description)?;
        writeln!(out, "   {}", outcome)?;
    }

    info!(
        "Scenarios complete: {} passed, {} blocked",
        summary.passed, summary.blocked
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_outcomes() {
        let passes: Vec<bool> = default_scenarios()
            .iter()
            .map(|s| s.run().is_pass())
            .collect();
        assert_eq!(passes, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_kind_tags() {
        for kind in [
            InputKind::SystemIdentifier,
            InputKind::CoordinationMessage,
            InputKind::ResourceAllocation,
        ] {
            assert_eq!(InputKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(InputKind::from_tag("MSG"), Some(InputKind::CoordinationMessage));
        assert_eq!(InputKind::from_tag("blob"), None);
    }

    #[test]
    fn test_demo_report() {
        let mut out = Vec::new();
        let summary = run_demo(&default_scenarios(), &mut out).unwrap();
        assert_eq!(
            summary,
            DemoSummary {
                passed: 3,
                blocked: 3
            }
        );

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Valid system ID:\n   PASS: auth-system-01"));
        assert!(report.contains(
            "Invalid system ID:\n   BLOCKED: System identifier contains invalid character '@'"
        ));
        assert!(report.contains("Dangerous message:\n   BLOCKED: Dangerous pattern detected: <script"));
        assert!(report.contains("Valid resource allocation:\n   PASS: 500"));
        assert!(report.contains("BLOCKED: Resource amount cannot be negative: -100"));
    }
}
