//! Micro Core - Front end of the Micro language (pure logic, no file IO)
//!
//! Contains the scanner, the token cursor and the recursive-descent recognizer,
//! plus the shared error-budget policy both stages report through.
//!
//! Configuration and the report sink are passed explicitly via parameters,
//! not via global state.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;

// Re-export common types
pub use error::StepError;
pub use lexer::{CharStream, Position, ScanError, Scanner, Token, TokenKind};
pub use parser::{ParseError, Parser, TokenCursor};
pub use report::{Diagnostic, ErrorBudget, MemorySink, NoopSink, ReportSink, StderrSink};

// Re-export config types from micro-config
pub use micro_config::{CheckConfig, Phase};
