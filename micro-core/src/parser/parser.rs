//! 递归下降识别器
//!
//! 文法（入口 `Program`）：
//!
//! ```text
//! Program        ::= "begin" StatementList "end"
//! StatementList  ::= Statement { Statement }
//! Statement      ::= ( Assignment | ReadCall | WriteCall ) ";"
//! Assignment     ::= Ident ":=" Expression
//! ReadCall       ::= "read" "(" IdentList ")"
//! WriteCall      ::= "write" "(" ExpressionList ")"
//! IdentList      ::= Ident { "," Ident }
//! ExpressionList ::= Expression { "," Expression }
//! Expression     ::= Primary { ("+" | "-") Primary }
//! Primary        ::= "(" Expression ")" | Ident | IntLiteral
//! ```
//!
//! 匹配失败时只报告并计数，不做同步恢复：控制流按匹配成功继续，
//! 从游标当前位置走下一步文法。只有预算耗尽的 [`StepError`] 会向外传播。

use micro_config::Phase;
use tracing::{debug, trace};

use super::cursor::TokenCursor;
use super::error::ParseError;
use crate::error::StepError;
use crate::lexer::{Token, TokenKind};
use crate::report::ErrorBudget;

/// 解析结果类型
pub type ParseResult<T> = Result<T, StepError>;

const STATEMENT_START: &[TokenKind] = &[TokenKind::Ident, TokenKind::Read, TokenKind::Write];
const PRIMARY_START: &[TokenKind] = &[TokenKind::LeftParen, TokenKind::Ident, TokenKind::IntLiteral];
const ADDITIVE_OPS: &[TokenKind] = &[TokenKind::PlusOp, TokenKind::MinusOp];

pub struct Parser<'b> {
    cursor: TokenCursor,
    budget: &'b mut ErrorBudget,
}

impl<'b> Parser<'b> {
    pub fn new(tokens: Vec<Token>, budget: &'b mut ErrorBudget) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            budget,
        }
    }

    /// 识别整个程序
    ///
    /// 只有在 `Program` 走完且没有记录任何错误时才成功。
    pub fn parse(&mut self) -> ParseResult<()> {
        self.parse_program()?;

        if !self.budget.is_clean() {
            debug!(
                target: "micro::parser",
                errors = self.budget.count(),
                "program recognized with errors"
            );
            return Err(StepError::exhausted(Phase::Parser));
        }

        debug!(
            target: "micro::parser",
            trailing = self.cursor.remaining(),
            "program recognized"
        );
        Ok(())
    }

    /// 只读访问游标（检查恢复后的位置）
    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    fn parse_program(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "Program");
        self.expect(&[TokenKind::Begin])?;
        self.parse_statement_list()?;
        self.expect(&[TokenKind::End])
    }

    /// 至少一条语句；是否继续只看预读的一个 token
    fn parse_statement_list(&mut self) -> ParseResult<()> {
        self.parse_statement()?;

        while self.check_any(STATEMENT_START) {
            self.parse_statement()?;
        }
        Ok(())
    }

    /// 语句自己消费分派 token，再交给具体产生式
    fn parse_statement(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "Statement");
        let next = self.cursor.advance().cloned();

        match next.as_ref().map(|token| token.kind) {
            Some(TokenKind::Ident) => self.parse_assignment()?,
            Some(TokenKind::Read) => self.parse_read()?,
            Some(TokenKind::Write) => self.parse_write()?,
            // 分派失败时不再匹配分号
            _ => return self.report(STATEMENT_START, next),
        }

        self.expect(&[TokenKind::Semicolon])
    }

    /// 开头的标识符已被消费
    fn parse_assignment(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "Assignment");
        self.expect(&[TokenKind::AssignOp])?;
        self.parse_expression()
    }

    /// `read` 已被消费
    fn parse_read(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "ReadCall");
        self.expect(&[TokenKind::LeftParen])?;
        self.parse_ident_list()?;
        self.expect(&[TokenKind::RightParen])
    }

    /// `write` 已被消费
    fn parse_write(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "WriteCall");
        self.expect(&[TokenKind::LeftParen])?;
        self.parse_expression_list()?;
        self.expect(&[TokenKind::RightParen])
    }

    fn parse_ident_list(&mut self) -> ParseResult<()> {
        self.expect(&[TokenKind::Ident])?;

        while self.check(TokenKind::Comma) {
            self.expect(&[TokenKind::Comma])?;
            self.expect(&[TokenKind::Ident])?;
        }
        Ok(())
    }

    fn parse_expression_list(&mut self) -> ParseResult<()> {
        self.parse_expression()?;

        while self.check(TokenKind::Comma) {
            self.expect(&[TokenKind::Comma])?;
            self.parse_expression()?;
        }
        Ok(())
    }

    fn parse_expression(&mut self) -> ParseResult<()> {
        trace!(target: "micro::parser", "Expression");
        self.parse_primary()?;

        while self.check_any(ADDITIVE_OPS) {
            self.expect(ADDITIVE_OPS)?;
            self.parse_primary()?;
        }
        Ok(())
    }

    fn parse_primary(&mut self) -> ParseResult<()> {
        let next = self.cursor.advance().cloned();

        match next.as_ref().map(|token| token.kind) {
            Some(TokenKind::LeftParen) => {
                self.parse_expression()?;
                self.expect(&[TokenKind::RightParen])
            }
            Some(TokenKind::Ident) | Some(TokenKind::IntLiteral) => Ok(()),
            _ => self.report(PRIMARY_START, next),
        }
    }

    /// 预读的 token 是否为指定种类
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.peek_kind() == Some(kind)
    }

    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        self.cursor
            .peek_kind()
            .map(|kind| kinds.contains(&kind))
            .unwrap_or(false)
    }

    /// 消费一个 token 并检查是否属于期望集合
    ///
    /// 不匹配时报告错误后照常返回（预算耗尽除外），不跳过任何 token。
    fn expect(&mut self, expected: &[TokenKind]) -> ParseResult<()> {
        match self.cursor.advance().map(|token| token.kind) {
            Some(kind) if expected.contains(&kind) => Ok(()),
            _ => {
                let found = self.cursor.current().cloned();
                self.report(expected, found)
            }
        }
    }

    fn report(&mut self, expected: &[TokenKind], found: Option<Token>) -> ParseResult<()> {
        let error = ParseError::new(expected, found);
        if let Some(token) = &error.found {
            debug!(
                target: "micro::parser",
                line = token.position.line,
                column = token.position.column,
                "unexpected token {:?}",
                token.kind
            );
        } else {
            debug!(target: "micro::parser", "unexpected end of input");
        }
        self.budget.record(Phase::Parser, &error)
    }
}
