//! Settings module for duplex-net configuration.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Seed applied to the backend RNG before parameter initialization.
    /// If not set, initialization is left nondeterministic.
    pub init_seed: Option<u64>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self { init_seed: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingSettings {
    /// Force consistency tests to run regardless of platform.
    pub force_consistency_tests: bool,

    /// Indicates if running in continuous integration environment.
    pub ci: bool,
}

impl Default for TestingSettings {
    fn default() -> Self {
        Self {
            force_consistency_tests: false,
            ci: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Model construction settings
    pub model: ModelSettings,

    /// Testing/Development settings
    pub testing: TestingSettings,
}

impl Settings {
    /// Create a new Settings instance from environment variables and config
    /// files. Environment variables are prefixed with "DUPLEX_".
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("model.init_seed", None::<i64>)?
            .set_default("testing.force_consistency_tests", false)?
            .set_default("testing.ci", false)?
            // Add configuration from .env file if it exists
            .add_source(File::with_name(".env").required(false))
            // Add environment variables with DUPLEX_ prefix
            .add_source(Environment::with_prefix("DUPLEX").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

/// Global settings instance
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the global settings instance, initializing it if necessary.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings::new().unwrap_or_else(|_| Settings::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.model.init_seed, None);
        assert!(!settings.testing.force_consistency_tests);
        assert!(!settings.testing.ci);
    }

    #[test]
    fn test_settings_from_environment_defaults() {
        let settings = Settings::new().expect("settings should build from defaults");
        assert_eq!(settings.model.init_seed, None);
        assert!(!settings.testing.ci);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            model: ModelSettings {
                init_seed: Some(42),
            },
            ..Settings::default()
        };

        // Test that settings can be serialized to JSON
        let json = serde_json::to_string(&settings).expect("Should serialize to JSON");
        assert!(json.contains("init_seed"));
        assert!(json.contains("force_consistency_tests"));
        assert!(json.contains("ci"));

        // Test that settings can be deserialized from JSON
        let deserialized: Settings =
            serde_json::from_str(&json).expect("Should deserialize from JSON");
        assert_eq!(deserialized.model.init_seed, Some(42));
        assert_eq!(
            deserialized.testing.force_consistency_tests,
            settings.testing.force_consistency_tests
        );
        assert_eq!(deserialized.testing.ci, settings.testing.ci);
    }

    #[test]
    fn test_global_settings_accessor() {
        let first = settings();
        let second = settings();
        assert!(std::ptr::eq(first, second));
    }
}
