//! Micro Config - Pure configuration data structures
//!
//! This crate contains only data structures, no IO or global state.
//! It serves as the shared configuration vocabulary across all Micro crates.

use serde::Deserialize;
use thiserror::Error;

/// Default number of recoverable errors a stage tolerates.
pub const DEFAULT_MAX_ERRORS: usize = 5;

/// Configuration for the checking stages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Error budget shared by the scanner and the parser
    pub max_errors: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

/// Log verbosity, ordered from quietest to noisiest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse a level name (case-insensitive). `silent` is an alias for `error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored multi-line output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
    /// Machine-readable output
    Json,
}

/// Logging configuration with optional per-phase overrides
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub scanner: Option<LogLevel>,
    pub parser: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::default(),
            scanner: None,
            parser: None,
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Scanner => self.scanner.unwrap_or(self.level),
            Phase::Parser => self.parser.unwrap_or(self.level),
        }
    }
}

/// Top-level configuration, as loaded from a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MicroConfig {
    pub check: CheckConfig,
    pub logging: LoggingConfig,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: max_errors must be at least 1")]
    ZeroErrorBudget,
}

impl MicroConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MicroConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check.max_errors == 0 {
            return Err(ConfigError::ZeroErrorBudget);
        }
        Ok(())
    }
}

/// Checking phase, used for per-phase configuration and log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Parser,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("micro::{}", self.as_str())
    }
}
