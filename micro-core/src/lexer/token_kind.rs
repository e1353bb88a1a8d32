//! Micro Token 类型定义

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
pub enum TokenKind {
    // 关键字
    Begin,
    End,
    Read,
    Write,

    // 标识符与字面量
    Ident,
    IntLiteral,

    // 分隔符
    LeftParen,
    RightParen,
    Semicolon,
    Comma,

    // 运算符
    AssignOp,
    PlusOp,
    MinusOp,
}

/// 保留字查找表，只在构造标识符 token 时查询
static RESERVED_WORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("begin", TokenKind::Begin),
        ("end", TokenKind::End),
        ("read", TokenKind::Read),
        ("write", TokenKind::Write),
    ])
});

impl TokenKind {
    /// 错误消息中使用的显示名
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Ident => "identifier",
            TokenKind::IntLiteral => "integer",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::AssignOp => ":=",
            TokenKind::PlusOp => "+",
            TokenKind::MinusOp => "-",
        }
    }

    /// 标识符形状的单词：保留字映射为关键字，其余为 `Ident`
    pub fn from_word(word: &str) -> TokenKind {
        RESERVED_WORDS.get(word).copied().unwrap_or(TokenKind::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
