//! Validated value types
//!
//! Newtypes that can only be built by passing validation. Holding one is proof
//! that the wrapped value satisfied its constraints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::patterns::find_blocked_pattern;
use super::{
    IDENTIFIER_MAX_LEN, IDENTIFIER_MIN_LEN, MAX_RESOURCE_AMOUNT, MESSAGE_MAX_LEN,
};
use crate::error::{FormatError, SecurityViolation, ValidationError};

/// Whitespace stripped from both ends of text input. Includes the ASCII
/// information separators `\x1c`-`\x1f`, which `char::is_whitespace` omits.
fn is_trimmed_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn trim_input(input: &str) -> &str {
    input.trim_matches(is_trimmed_char)
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}

/// Trimmed participant name, 3-64 characters of `[A-Za-z0-9._-]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SystemIdentifier(String);

impl SystemIdentifier {
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let trimmed = trim_input(input);

        let len = trimmed.chars().count();
        if !(IDENTIFIER_MIN_LEN..=IDENTIFIER_MAX_LEN).contains(&len) {
            return Err(FormatError::IdentifierLength(len));
        }

        if let Some(c) = trimmed.chars().find(|c| !is_identifier_char(*c)) {
            return Err(FormatError::InvalidCharacter(c));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Trimmed, non-empty coordination payload free of blocklisted patterns
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordinationMessage(String);

impl CoordinationMessage {
    /// Checks run in order: size, emptiness, then the blocklist scan.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = trim_input(input);

        let len = trimmed.chars().count();
        if len > MESSAGE_MAX_LEN {
            return Err(FormatError::MessageTooLarge(len).into());
        }
        if len == 0 {
            return Err(FormatError::EmptyMessage.into());
        }

        if let Some(pattern) = find_blocked_pattern(trimmed) {
            return Err(SecurityViolation::new(pattern).into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Whole-number allocation request in `0..=1_000_000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ResourceAmount(u32);

impl ResourceAmount {
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ResourceAmount {
    type Error = FormatError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        if amount < 0 {
            return Err(FormatError::NegativeAmount(amount));
        }
        match u32::try_from(amount) {
            Ok(n) if n <= MAX_RESOURCE_AMOUNT => Ok(Self(n)),
            _ => Err(FormatError::AmountTooLarge(amount as u64)),
        }
    }
}

impl From<ResourceAmount> for u32 {
    fn from(amount: ResourceAmount) -> Self {
        amount.0
    }
}

impl FromStr for SystemIdentifier {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for CoordinationMessage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SystemIdentifier {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for CoordinationMessage {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SystemIdentifier> for String {
    fn from(id: SystemIdentifier) -> Self {
        id.0
    }
}

impl From<CoordinationMessage> for String {
    fn from(message: CoordinationMessage) -> Self {
        message.0
    }
}

impl AsRef<str> for SystemIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CoordinationMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CoordinationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ResourceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
