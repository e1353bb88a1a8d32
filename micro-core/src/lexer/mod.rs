//! Micro 词法分析
//!
//! 字符流 -> 扫描器 -> 有序 token 序列。扫描器一次性读完全部输入，
//! 之后语法分析才开始。

pub mod error;
pub mod scanner;
pub mod stream;
pub mod token;
pub mod token_kind;

pub use error::ScanError;
pub use scanner::{ScanResult, Scanner};
pub use stream::CharStream;
pub use token::{Position, Token};
pub use token_kind::TokenKind;
