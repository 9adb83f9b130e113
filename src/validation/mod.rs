//! Input validation
//!
//! Stateless validators for data crossing a trust boundary: participant
//! identifiers, coordination messages and resource allocation amounts.

pub mod patterns;
pub mod results;
pub mod validator;

/// Shortest identifier, in characters, after trimming
pub const IDENTIFIER_MIN_LEN: usize = 3;
/// Longest identifier, in characters, after trimming
pub const IDENTIFIER_MAX_LEN: usize = 64;

/// Maximum coordination message length, in characters, after trimming
pub const MESSAGE_MAX_LEN: usize = 4096;

/// Largest allocation a single request may ask for
pub const MAX_RESOURCE_AMOUNT: u32 = 1_000_000;

pub use patterns::{BLOCKLIST, BlockedPattern, find_blocked_pattern};
pub use results::{CoordinationMessage, ResourceAmount, SystemIdentifier};
pub use validator::{
    validate_coordination_message, validate_resource_allocation, validate_system_identifier,
};
