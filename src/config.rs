//! Configuration management for the validation harness
//!
//! Settings come from an optional `nexus.toml` (or an explicit path) with
//! `NEXUS_` environment overrides. The blocklist is not configurable.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::harness::{Scenario, default_scenarios};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "nexus";

#[derive(Debug, Deserialize, Clone)]
pub struct HarnessConfig {
    /// Scenarios run by the demo. Defaults to the six built-in ones.
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<Scenario>,

    /// Stop screening at the first security violation
    /// Environment: NEXUS_STOP_ON_VIOLATION
    #[serde(default)]
    pub stop_on_violation: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenarios: default_scenarios(),
            stop_on_violation: false,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from `path` (required) or `nexus.toml` (optional),
    /// with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path)),
            None => Config::builder().add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("NEXUS"))
            .build()?;
        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: HarnessConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::Message(
                "scenarios must contain at least one entry".into(),
            ));
        }

        if let Some(index) = self
            .scenarios
            .iter()
            .position(|s| s.description.trim().is_empty())
        {
            return Err(ConfigError::Message(format!(
                "scenario {} has an empty description",
                index
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::InputKind;
    use serde_json::json;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = HarnessConfig::from_toml("").unwrap();
        assert_eq!(config.scenarios, default_scenarios());
        assert!(!config.stop_on_violation);
    }

    #[test]
    fn test_custom_scenarios() {
        let config = HarnessConfig::from_toml(
            r#"
            stop_on_violation = true

            [[scenarios]]
            description = "Fractional amount"
            kind = "resource_allocation"
            input = 12.5

            [[scenarios]]
            description = "Relay node"
            kind = "system_identifier"
            input = "relay.eu-west_2"
            "#,
        )
        .unwrap();

        assert!(config.stop_on_violation);
        assert_eq!(config.scenarios.len(), 2);
        assert_eq!(config.scenarios[0].kind, InputKind::ResourceAllocation);
        assert_eq!(config.scenarios[0].input, json!(12.5));
        assert!(!config.scenarios[0].run().is_pass());
        assert_eq!(config.scenarios[1].input, json!("relay.eu-west_2"));
        assert!(config.scenarios[1].run().is_pass());
    }

    #[test]
    fn test_load_file_with_env_override() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("nexus.example.toml");

        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-config.toml");

        // SAFETY: this is the only test that touches the process environment
        unsafe { std::env::set_var("NEXUS_STOP_ON_VIOLATION", "true") };
        let result = HarnessConfig::load(Some(&path));
        let missing_result = HarnessConfig::load(Some(&missing));
        unsafe { std::env::remove_var("NEXUS_STOP_ON_VIOLATION") };

        assert!(missing_result.is_err());

        let config = result.unwrap();
        assert!(config.stop_on_violation);
        assert_eq!(config.scenarios.len(), 3);
        assert_eq!(config.scenarios[1].kind, InputKind::ResourceAllocation);
        assert_eq!(config.scenarios[1].input, json!(12.5));
        assert_eq!(config.scenarios[2].description, "Embedded PHP");
        assert!(!config.scenarios[2].run().is_pass());
    }

    #[test]
    fn test_rejects_blank_description() {
        let err = HarnessConfig::from_toml(
            r#"
            [[scenarios]]
            description = "  "
            kind = "coordination_message"
            input = "hello"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty description"));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(
            HarnessConfig::from_toml(
                r#"
                [[scenarios]]
                description = "Bad kind"
                kind = "password"
                input = "x"
                "#,
            )
            .is_err()
        );
    }
}
