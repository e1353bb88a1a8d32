//! 测试辅助工具
//!
//! 提供扫描/识别的端到端辅助函数，错误报告收集到 `MemorySink`

#![allow(dead_code)]

use std::sync::Arc;

use micro_core::{ErrorBudget, MemorySink, Parser, Scanner, StepError, Token, TokenKind};

/// 一次阶段运行的结果和按顺序收集的报告行
pub struct Outcome<T> {
    pub result: Result<T, StepError>,
    pub errors: Vec<String>,
}

/// 扫描源码
pub fn scan(source: &str, max_errors: usize) -> Outcome<Vec<Token>> {
    let sink = MemorySink::new();
    let mut budget = ErrorBudget::new(max_errors, Arc::new(sink.clone()));
    let result = Scanner::new(source.as_bytes()).scan(&mut budget);
    Outcome {
        result,
        errors: sink.lines(),
    }
}

/// 扫描必须成功，返回 token
pub fn scan_ok(source: &str) -> Vec<Token> {
    let outcome = scan(source, 5);
    assert!(outcome.errors.is_empty(), "unexpected scan errors: {:?}", outcome.errors);
    outcome.result.expect("scan failed")
}

/// 只比较 (种类, 文本)，忽略位置
pub fn shape(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.lexeme.clone())).collect()
}

/// 扫描（必须干净）后识别
pub fn parse(source: &str, max_errors: usize) -> Outcome<()> {
    let tokens = scan_ok(source);
    let sink = MemorySink::new();
    let mut budget = ErrorBudget::new(max_errors, Arc::new(sink.clone()));
    let result = Parser::new(tokens, &mut budget).parse();
    Outcome {
        result,
        errors: sink.lines(),
    }
}
