pub mod cursor;
pub mod error;
pub mod parser;

// 重新导出常用类型
pub use cursor::TokenCursor;
pub use error::{ParseError, EOF_LEXEME};
pub use parser::{ParseResult, Parser};
