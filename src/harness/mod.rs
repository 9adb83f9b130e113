//! Validation harness
//!
//! Demo scenarios and line screening built on top of the validators.

pub mod scenarios;
pub mod screen;

pub use scenarios::{DemoSummary, InputKind, Outcome, Scenario, default_scenarios, run_demo};
pub use screen::{ScreenSummary, Verdict, screen, screen_line};
