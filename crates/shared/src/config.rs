//! Application configuration management.
//!
//! The engine itself never reads ambient state; session-derived settings
//! (display currency, theme) and table defaults reach it through this
//! config, resolved once at process startup.

use serde::Deserialize;

use crate::types::currency::CurrencyCode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Table view configuration.
    #[serde(default)]
    pub table: TableConfig,
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// UI theme.
    #[serde(default)]
    pub theme: Theme,
    /// Currency used when rendering amounts.
    #[serde(default = "default_display_currency")]
    pub currency: CurrencyCode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency: default_display_currency(),
        }
    }
}

fn default_display_currency() -> CurrencyCode {
    CurrencyCode::usd()
}

/// UI theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Table view configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Rows per page in paginated tables.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    5
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
            .add_source(config::Environment::with_prefix("SPENDSIGHT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
