//! Input validator
//!
//! Type-checks untyped values arriving from another system and runs the
//! matching constraint checks. Every function is pure: no logging, no state.

use serde_json::Value;

use super::results::{CoordinationMessage, ResourceAmount, SystemIdentifier};
use crate::error::{FormatError, ValidationError};

/// Validates a participant name and returns its trimmed form.
pub fn validate_system_identifier(input: &Value) -> Result<SystemIdentifier, FormatError> {
    match input {
        Value::String(s) => SystemIdentifier::parse(s),
        _ => Err(FormatError::NotAString("System identifier")),
    }
}

/// Validates a coordination payload and returns its trimmed form.
///
/// A blocklisted pattern yields `ValidationError::Security`; every other
/// failure is `ValidationError::Format`.
pub fn validate_coordination_message(input: &Value) -> Result<CoordinationMessage, ValidationError> {
    match input {
        Value::String(s) => CoordinationMessage::parse(s),
        _ => Err(FormatError::NotAString("Coordination message").into()),
    }
}

/// Validates a resource allocation request.
///
/// Only JSON integers are accepted; `500.0` is a float and is rejected.
pub fn validate_resource_allocation(input: &Value) -> Result<ResourceAmount, FormatError> {
    let Value::Number(number) = input else {
        return Err(FormatError::NotAnInteger);
    };

    if let Some(n) = number.as_i64() {
        ResourceAmount::try_from(n)
    } else if let Some(n) = number.as_u64() {
        Err(FormatError::AmountTooLarge(n))
    } else {
        Err(FormatError::NotAnInteger)
    }
}
