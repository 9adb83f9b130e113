//! Error handlers
//!
//! Reporting helpers for callers of the validators. The validators themselves
//! never log; these are used by the command-line front end.

use crate::error::types::ValidationError;
use log::{error, warn};

/// Log a rejected input at a level matching its severity
pub fn handle_error(context: &str, err: &ValidationError) {
    match err {
        ValidationError::Security(violation) => {
            error!(
                "Security violation in {}: pattern {:?} matched",
                context,
                violation.pattern().as_str()
            )
        }
        ValidationError::Format(e) => warn!("Rejected {}: {}", context, e),
    }
}

/// Short verdict label for an error
pub fn error_label(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::Format(_) => "FORMAT",
        ValidationError::Security(_) => "SECURITY",
    }
}
