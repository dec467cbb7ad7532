//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting engine defaults.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Defaults for report building.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Window size in months when the caller does not specify one.
    #[serde(default = "default_window_months")]
    pub default_window_months: u32,
}

fn default_window_months() -> u32 {
    6
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            default_window_months: default_window_months(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
