//! 扫描错误

use std::fmt;

use super::token::Position;

/// 无法归类的单个字符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    /// 非法字符
    pub ch: char,
    /// 字符所在位置
    pub position: Position,
}

impl ScanError {
    pub fn new(ch: char, position: Position) -> Self {
        Self { ch, position }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scanner: Invalid token found '{}'", self.ch)
    }
}

impl std::error::Error for ScanError {}
