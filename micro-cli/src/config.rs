//! CLI 配置
//!
//! 把配置文件中的日志设置转换为 tracing 级别，按阶段覆盖

use micro_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub scanner: Option<Level>,
    pub parser: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            scanner: None,
            parser: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "micro::scanner" => self.scanner.unwrap_or(self.global),
            "micro::parser" => self.parser.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            global: to_tracing_level(config.level),
            scanner: config.scanner.map(to_tracing_level),
            parser: config.parser.map(to_tracing_level),
        }
    }
}

/// Phase-specific log target names
pub fn phase_targets() -> [String; 2] {
    [Phase::Scanner.target(), Phase::Parser.target()]
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
