//! Micro API - Check orchestration layer
//!
//! Provides the unified checking interface, including:
//! - Stage orchestration (scan fully, then recognize)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (MicroError)
//!
//! The caller owns the input stream; this crate never opens files.

use std::io::BufRead;

use micro_core::{Parser, Phase, Scanner, StepError, Token};
use tracing::{debug, info};

pub mod config;
pub use config::RunConfig;

pub mod error;
pub mod types;
pub use error::{ConfigError, MicroError};
pub use types::CheckOutput;

// Re-export config and core types
pub use micro_config;
pub use micro_config::{CheckConfig, LogFormat, LogLevel, LoggingConfig, MicroConfig};
pub use micro_core::{Diagnostic, MemorySink, NoopSink, ReportSink, StderrSink, TokenKind};

/// Scan the whole input into tokens
///
/// Fails if the error budget runs out, if the stream faults, or if any
/// invalid character was reported at all.
pub fn scan<R: BufRead>(reader: R, config: &RunConfig) -> Result<Vec<Token>, MicroError> {
    info!(target: "micro::api", "Starting scanner");

    let mut budget = config.budget();
    let tokens = Scanner::new(reader).scan(&mut budget)?;

    if !budget.is_clean() {
        debug!(
            target: "micro::api",
            errors = budget.count(),
            "scanner reported errors, not parsing"
        );
        return Err(StepError::exhausted(Phase::Scanner).into());
    }

    info!(target: "micro::api", tokens = tokens.len(), "Scanner completed");
    Ok(tokens)
}

/// Recognize a token sequence against the grammar
pub fn parse(tokens: Vec<Token>, config: &RunConfig) -> Result<(), MicroError> {
    info!(target: "micro::api", "Starting parser");

    let mut budget = config.budget();
    Parser::new(tokens, &mut budget).parse()?;

    info!(target: "micro::api", "Parser completed");
    Ok(())
}

/// Check one input stream: scan it fully, then recognize the tokens
pub fn check<R: BufRead>(reader: R, config: &RunConfig) -> Result<CheckOutput, MicroError> {
    let tokens = scan(reader, config)?;
    let token_count = tokens.len();
    parse(tokens, config)?;
    Ok(CheckOutput { token_count })
}

/// Check an in-memory source
pub fn check_str(source: &str, config: &RunConfig) -> Result<CheckOutput, MicroError> {
    check(source.as_bytes(), config)
}
