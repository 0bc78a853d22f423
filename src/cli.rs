//! Command-line interface argument parsing.
//!
//! This module defines the CLI structure and parsing logic using gumdrop.

use gumdrop::Options;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Show all messages including trace
    Trace,
    /// Show debug messages and above
    Debug,
    /// Show info messages and above (default)
    Info,
    /// Show warnings and errors only
    Warn,
    /// Show errors only
    Error,
}

impl LogLevel {
    /// Convert LogLevel to a tracing filter string
    pub fn to_filter_string(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_filter_string())
    }
}

/// Sensor selector: pick which sensor parameter to display
#[derive(Debug, Options)]
pub struct Cli {
    /// Print help message
    #[options(help = "print help message")]
    pub help: bool,

    /// Print version
    #[options(short = "V", help = "print version and exit")]
    pub version: bool,

    /// Path to configuration file
    #[options(
        help = "path to configuration file",
        meta = "PATH",
        default = "sensor-selector.toml"
    )]
    pub config: PathBuf,

    /// Log level (overrides config file)
    #[options(short = "L", help = "log level: trace, debug, info, warn, error", meta = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log file (overrides config file)
    #[options(short = "F", help = "write logs to this file", meta = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds (overrides config file)
    #[options(short = "t", help = "input poll interval in milliseconds", meta = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Disable mouse capture
    #[options(no_short, help = "disable mouse capture")]
    pub no_mouse: bool,

    /// Print the effective configuration and exit
    #[options(no_short, help = "print the effective configuration as TOML and exit")]
    pub print_config: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse_args_default_or_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Info.to_filter_string(), "info");
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_args_default::<&str>(&[]).unwrap();
        assert_eq!(cli.config, PathBuf::from("sensor-selector.toml"));
        assert_eq!(cli.log_level, None);
        assert_eq!(cli.tick_rate_ms, None);
        assert!(!cli.no_mouse);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_args_default(&[
            "-c", "custom.toml", "-F", "out.log", "--print-config",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert!(cli.print_config);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Cli::parse_args_default(&["-L", "loud"]).is_err());
    }
}
