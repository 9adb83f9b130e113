//! Error types
//!
//! Defines the validation error taxonomy: ordinary format errors and
//! security violations, folded into one `ValidationError`.

use std::fmt;

use crate::validation::patterns::BlockedPattern;
use crate::validation::{
    IDENTIFIER_MAX_LEN, IDENTIFIER_MIN_LEN, MAX_RESOURCE_AMOUNT, MESSAGE_MAX_LEN,
};

/// Malformed input that does not meet a shape, range or type constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The value was not text. Carries the name of the value being validated.
    NotAString(&'static str),
    IdentifierLength(usize),
    InvalidCharacter(char),
    MessageTooLarge(usize),
    EmptyMessage,
    NotAnInteger,
    NegativeAmount(i64),
    AmountTooLarge(u64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotAString(subject) => write!(f, "{} must be a string", subject),
            FormatError::IdentifierLength(len) => write!(
                f,
                "System identifier must be {}-{} characters (got {})",
                IDENTIFIER_MIN_LEN, IDENTIFIER_MAX_LEN, len
            ),
            FormatError::InvalidCharacter(c) => {
                write!(f, "System identifier contains invalid character {:?}", c)
            }
            FormatError::MessageTooLarge(len) => write!(
                f,
                "Coordination message too large: {} characters (max {})",
                len, MESSAGE_MAX_LEN
            ),
            FormatError::EmptyMessage => write!(f, "Coordination message cannot be empty"),
            FormatError::NotAnInteger => write!(f, "Resource amount must be an integer"),
            FormatError::NegativeAmount(n) => {
                write!(f, "Resource amount cannot be negative: {}", n)
            }
            FormatError::AmountTooLarge(n) => write!(
                f,
                "Resource amount too large: {} (max {})",
                n, MAX_RESOURCE_AMOUNT
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Input matched a known attack signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityViolation {
    pattern: BlockedPattern,
}

impl SecurityViolation {
    pub fn new(pattern: BlockedPattern) -> Self {
        Self { pattern }
    }

    /// The blocklist entry that matched
    pub fn pattern(&self) -> BlockedPattern {
        self.pattern
    }
}

impl fmt::Display for SecurityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dangerous pattern detected: {}", self.pattern)
    }
}

impl std::error::Error for SecurityViolation {}

/// Any rejection produced by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Format(FormatError),
    Security(SecurityViolation),
}

impl ValidationError {
    pub fn is_security_violation(&self) -> bool {
        matches!(self, ValidationError::Security(_))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Format(e) => write!(f, "{}", e),
            ValidationError::Security(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::Format(e) => Some(e),
            ValidationError::Security(e) => Some(e),
        }
    }
}

impl From<FormatError> for ValidationError {
    fn from(error: FormatError) -> Self {
        ValidationError::Format(error)
    }
}

impl From<SecurityViolation> for ValidationError {
    fn from(error: SecurityViolation) -> Self {
        ValidationError::Security(error)
    }
}
