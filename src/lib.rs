pub mod config;
pub mod error;
pub mod harness;
pub mod utils;
pub mod validation;

pub use error::{FormatError, SecurityViolation, ValidationError};
pub use validation::{
    CoordinationMessage, ResourceAmount, SystemIdentifier, validate_coordination_message,
    validate_resource_allocation, validate_system_identifier,
};
