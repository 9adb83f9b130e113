//! Error handling
//!
//! Defines error types and reporting helpers for input validation.

pub mod handlers;
pub mod types;

pub use types::*;
