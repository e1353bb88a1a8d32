use std::fmt;

use crate::lexer::{Token, TokenKind};

/// 输入结束时报告中使用的占位文本
pub const EOF_LEXEME: &str = "EOF";

/// 语法错误：实际 token 不在期望集合内
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 期望的 token 种类
    pub expected: Vec<TokenKind>,
    /// 实际遇到的 token，`None` 表示输入已结束
    pub found: Option<Token>,
}

impl ParseError {
    pub fn new(expected: &[TokenKind], found: Option<Token>) -> Self {
        Self {
            expected: expected.to_vec(),
            found,
        }
    }

    /// 实际 token 的文本，输入结束时为 `EOF`
    pub fn found_lexeme(&self) -> &str {
        self.found
            .as_ref()
            .map(|token| token.lexeme.as_str())
            .unwrap_or(EOF_LEXEME)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = self.expected.iter().map(TokenKind::as_str).collect();
        write!(
            f,
            "parser: Expected '{}' but found '{}'",
            expected.join(", "),
            self.found_lexeme()
        )
    }
}

impl std::error::Error for ParseError {}
