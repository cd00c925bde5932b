//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use charset_core::CharsetId;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Longest sequence the CLI will produce per line.
pub const MAX_LENGTH: usize = 1_000_000;

/// Environment variable naming the default catalog entry.
pub const ENV_DEFAULT_SET: &str = "CHARSET_DEFAULT_SET";
/// Environment variable holding the default sequence length.
pub const ENV_DEFAULT_LENGTH: &str = "CHARSET_DEFAULT_LENGTH";
/// Environment variable holding a fixed seed.
pub const ENV_SEED: &str = "CHARSET_SEED";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "CHARSET_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid charset: {0}")]
    InvalidCharset(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue {
        name: &'static str,
        value: String,
    },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Catalog entry sampled when none is given
    pub default_charset: CharsetId,
    /// Sequence length used when none is given
    pub default_length: usize,
    /// Fixed seed; the clock is used when absent
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_charset: CharsetId::Ascii,
            default_length: 16,
            seed: None,
            log_level: LogLevel::Warn,
        }
    }
}

/// Source of environment variables, so tests can supply their own.
pub trait EnvSource {
    /// Returns the value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables that are set
    pub fn merge_with_env(&mut self, env: &impl EnvSource) -> Result<(), ConfigError> {
        if let Some(name) = env.var(ENV_DEFAULT_SET) {
            self.default_charset = parse_charset(&name)?;
        }

        if let Some(length) = env.var(ENV_DEFAULT_LENGTH) {
            self.default_length = length.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_DEFAULT_LENGTH,
                value: length.clone(),
            })?;
        }

        if let Some(seed) = env.var(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_SEED,
                value: seed.clone(),
            })?);
        }

        if let Some(level) = env.var(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level == LogLevel::Warn {
            self.log_level = LogLevel::Info;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_length > MAX_LENGTH {
            return Err(ConfigError::InvalidValue {
                name: "default_length",
                value: format!("{} exceeds {}", self.default_length, MAX_LENGTH),
            });
        }

        Ok(())
    }
}

fn parse_charset(name: &str) -> Result<CharsetId, ConfigError> {
    name.parse()
        .map_err(|_| ConfigError::InvalidCharset(name.to_string()))
}

/// Command-line values that feed into the configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the default log level to info
    pub verbose: bool,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs, env: &impl EnvSource) -> Result<CliConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.merge_with_env(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
