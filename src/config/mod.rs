//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VDD__` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vdd::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Weighting sheet anchored at {}", config.weighting.anchor);
//! ```

mod error;
mod logging;
mod weighting;
mod workbook;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use weighting::WeightingConfig;
pub use workbook::WorkbookConfig;

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
/// Commands check for the paths they need with `require_path`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// CODA workbook (path, layout)
    #[serde(default)]
    pub workbook: WorkbookConfig,

    /// Binary weighting sheet (path, shuffle, anchor)
    #[serde(default)]
    pub weighting: WeightingConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VDD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VDD__WORKBOOK__PATH=helmet.yaml` -> `workbook.path = helmet.yaml`
    /// - `VDD__WEIGHTING__SHUFFLE=false` -> `weighting.shuffle = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("VDD").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - Anchor cells parse as A1 notation
    /// - Configured paths are non-empty with a supported extension
    /// - The log filter is not empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.workbook.validate()?;
        self.weighting.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Checks a sheet path is non-empty and names a YAML or JSON file.
pub(crate) fn validate_sheet_path(setting: &'static str, path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::EmptyPath(setting));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml") | Some("yml") | Some("json") => Ok(()),
        _ => Err(ValidationError::UnsupportedExtension(
            path.display().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coda::CodaLayout;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "VDD__WORKBOOK__PATH",
        "VDD__WORKBOOK__LAYOUT",
        "VDD__WEIGHTING__PATH",
        "VDD__WEIGHTING__SHUFFLE",
        "VDD__WEIGHTING__ANCHOR",
        "VDD__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.workbook.layout, CodaLayout::Full);
        assert!(config.weighting.shuffle);
        assert_eq!(config.weighting.anchor, "A1");
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VDD__WORKBOOK__PATH", "helmet-coda.yaml");
        env::set_var("VDD__WORKBOOK__LAYOUT", "compact");
        env::set_var("VDD__WEIGHTING__PATH", "helmet-bwm.json");
        env::set_var("VDD__WEIGHTING__SHUFFLE", "false");
        env::set_var("VDD__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.workbook.require_path().unwrap(),
            Path::new("helmet-coda.yaml")
        );
        assert_eq!(config.workbook.layout, CodaLayout::Compact);
        assert!(!config.weighting.shuffle);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_anchor() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VDD__WEIGHTING__ANCHOR", "nowhere");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidAnchor("nowhere".to_string()))
        );
    }

    #[test]
    fn test_sheet_path_extensions() {
        assert!(validate_sheet_path("p", Path::new("a.YAML")).is_ok());
        assert!(validate_sheet_path("p", Path::new("dir/a.yml")).is_ok());
        assert!(validate_sheet_path("p", Path::new("a.json")).is_ok());
        assert!(validate_sheet_path("p", Path::new("a.csv")).is_err());
        assert!(validate_sheet_path("p", Path::new("noext")).is_err());
    }
}
