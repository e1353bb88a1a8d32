//! Token 游标
//!
//! 对 token 序列的单向顺序视图：预读一个、消费一个。

use std::collections::VecDeque;

use crate::lexer::{Token, TokenKind};

/// 单向 token 游标
///
/// 消费过的 token 不会再次出现；`peek` 从不前进。
/// `current` 记住最近一次消费的 token，用于错误报告。
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    remaining: VecDeque<Token>,
    current: Option<Token>,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            remaining: tokens.into(),
            current: None,
        }
    }

    /// 预读下一个 token（不消费）
    pub fn peek(&self) -> Option<&Token> {
        self.remaining.front()
    }

    /// 下一个 token 的种类
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// 消费下一个 token；序列耗尽时 `current` 也被清空
    pub fn advance(&mut self) -> Option<&Token> {
        self.current = self.remaining.pop_front();
        self.current.as_ref()
    }

    /// 最近一次消费的 token
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// 剩余未消费的 token 数
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
