//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the command-line front end. `RUST_LOG` overrides the
/// default `warn` filter so stdout reports stay uncluttered.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
