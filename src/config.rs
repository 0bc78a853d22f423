//! Application configuration management.
//!
//! This module handles loading, parsing, and validating the application
//! configuration. Values are layered: built-in defaults, then the optional
//! TOML file, then `SENSOR_SELECTOR__*` environment variables, then CLI
//! overrides.

use crate::error::{ConfigError, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variable overrides
const ENV_PREFIX: &str = "SENSOR_SELECTOR";

/// Accepted logging levels
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Screen and input configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for input before redrawing
    pub tick_rate_ms: u64,
    /// Distance of the selector from the top and right edges, in cells
    pub inset: u16,
    /// Share of the screen width taken by the selector buttons
    pub width_ratio: f64,
    /// Capture mouse clicks
    pub mouse: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            inset: 1,
            width_ratio: 0.6,
            mouse: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    /// Call [`AppConfig::validate`] once CLI overrides have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let config: AppConfig = config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.tick_rate_ms".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !(self.ui.width_ratio > 0.0 && self.ui.width_ratio <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "ui.width_ratio".to_string(),
                message: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Apply CLI argument overrides to configuration
    pub fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(level) = cli.log_level {
            self.logging.level = level.to_filter_string().to_string();
        }

        if let Some(file) = &cli.log_file {
            self.logging.file = Some(file.clone());
        }

        if let Some(tick_rate) = cli.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate;
        }

        if cli.no_mouse {
            self.ui.mouse = false;
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use gumdrop::Options;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.inset, 1);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_width_ratio() {
        let mut config = AppConfig::default();
        config.ui.width_ratio = 0.0;
        assert!(config.validate().is_err());
        config.ui.width_ratio = 1.5;
        assert!(config.validate().is_err());
        config.ui.width_ratio = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ui]\ninset = 4\nwidth_ratio = 0.5\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.ui.inset, 4);
        assert_eq!(config.ui.width_ratio, 0.5);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.ui.inset, 1);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ui\ninset = ").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ui]\ntick_rate_ms = 0").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_override_fixes_invalid_file_value() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ui]\ntick_rate_ms = 0").unwrap();
        let cli = Cli::parse_args_default(&["-t", "100"]).unwrap();

        let mut config = AppConfig::load(file.path()).unwrap();
        config.apply_cli_overrides(&cli);

        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_args_default(&["--tick-rate-ms", "250", "--no-mouse", "-L", "warn"]).unwrap();
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&cli);

        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(!config.ui.mouse);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[ui]"));
        assert!(text.contains("[logging]"));
    }
}
