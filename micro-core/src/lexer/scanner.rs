//! Micro 语言扫描器
//!
//! 按首字符分发：
//! - 空白符跳过
//! - `(` `)` `;` `,` `+` 单字符 token
//! - 字母开头：标识符或保留字（最长匹配）
//! - 数字开头：整数字面量（最长匹配）
//! - `:=` 赋值运算符
//! - `-` 减号，`--` 行注释

use std::io::{self, BufRead};

use micro_config::Phase;
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::error::ScanError;
use super::stream::CharStream;
use super::token::{Position, Token};
use super::token_kind::TokenKind;
use crate::error::StepError;
use crate::report::ErrorBudget;

/// 单次扫描结果
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    /// 成功扫描到 token
    Token(Token),
    /// 非法字符（可恢复）
    Error(ScanError),
    /// 输入结束
    Eof,
}

/// 扫描器
pub struct Scanner<R> {
    stream: CharStream<R>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        trace!(target: "micro::scanner", "Creating new Scanner");
        Self {
            stream: CharStream::new(reader),
        }
    }

    /// 扫描全部输入
    ///
    /// 每个非法字符都记入 `budget` 后继续扫描；预算耗尽时立即失败，
    /// 已收集的 token 随之丢弃。正常到达输入末尾时返回全部 token，
    /// 是否出现过错误由调用方通过 `budget` 判断。
    pub fn scan(&mut self, budget: &mut ErrorBudget) -> Result<Vec<Token>, StepError> {
        let mut tokens = Vec::new();

        loop {
            match self.next_token()? {
                ScanResult::Token(token) => tokens.push(token),
                ScanResult::Error(err) => {
                    debug!(
                        target: "micro::scanner",
                        line = err.position.line,
                        column = err.position.column,
                        "invalid character {:?}",
                        err.ch
                    );
                    budget.record(Phase::Scanner, &err)?;
                }
                ScanResult::Eof => break,
            }
        }

        debug!(
            target: "micro::scanner",
            tokens = tokens.len(),
            errors = budget.count(),
            "scanning finished"
        );
        Ok(tokens)
    }

    /// 读取下一个 token，注释和空白不产生 token
    pub fn next_token(&mut self) -> io::Result<ScanResult> {
        loop {
            let start = self.stream.position();
            let c = match self.stream.read_char()? {
                Some(c) => c,
                None => return Ok(ScanResult::Eof),
            };

            let result = match c {
                c if c.is_whitespace() => continue,
                '(' => self.single(TokenKind::LeftParen, c, start),
                ')' => self.single(TokenKind::RightParen, c, start),
                ';' => self.single(TokenKind::Semicolon, c, start),
                ',' => self.single(TokenKind::Comma, c, start),
                '+' => self.single(TokenKind::PlusOp, c, start),
                c if is_letter(c) => self.scan_identifier(c, start)?,
                c if is_digit(c) => self.scan_integer(c, start)?,
                ':' => self.scan_assign(start)?,
                '-' => match self.scan_minus_or_comment(start)? {
                    Some(result) => result,
                    None => continue,
                },
                other => ScanResult::Error(ScanError::new(other, start)),
            };

            if let ScanResult::Token(token) = &result {
                trace!(
                    target: "micro::scanner",
                    kind = token.kind.as_str(),
                    lexeme = %token.lexeme,
                    line = token.position.line,
                    column = token.position.column,
                    "Produced token"
                );
            }
            return Ok(result);
        }
    }

    fn single(&self, kind: TokenKind, c: char, start: Position) -> ScanResult {
        ScanResult::Token(Token::new(kind, c.to_string(), start))
    }

    /// 标识符或保留字：字母开头，后续为字母、数字或下划线
    fn scan_identifier(&mut self, first: char, start: Position) -> io::Result<ScanResult> {
        let word = self.read_run(first, |c| is_letter(c) || is_digit(c) || c == '_')?;
        let kind = TokenKind::from_word(&word);
        Ok(ScanResult::Token(Token::new(kind, word, start)))
    }

    fn scan_integer(&mut self, first: char, start: Position) -> io::Result<ScanResult> {
        let digits = self.read_run(first, is_digit)?;
        Ok(ScanResult::Token(Token::new(TokenKind::IntLiteral, digits, start)))
    }

    /// 读取最长连续片段，终止字符放回流中
    fn read_run(&mut self, first: char, accept: impl Fn(char) -> bool) -> io::Result<String> {
        let mut lexeme = String::from(first);
        while let Some(c) = self.stream.read_char()? {
            if accept(c) {
                lexeme.push(c);
            } else {
                self.stream.unread(c);
                break;
            }
        }
        Ok(lexeme)
    }

    /// 冒号已被消费；非法时报告的是冒号本身，后续字符放回
    fn scan_assign(&mut self, start: Position) -> io::Result<ScanResult> {
        match self.stream.read_char()? {
            Some('=') => Ok(ScanResult::Token(Token::new(TokenKind::AssignOp, ":=", start))),
            Some(other) => {
                self.stream.unread(other);
                Ok(ScanResult::Error(ScanError::new(':', start)))
            }
            None => Ok(ScanResult::Error(ScanError::new(':', start))),
        }
    }

    /// 第一个 `-` 已被消费。返回 `None` 表示跳过了一行注释
    fn scan_minus_or_comment(&mut self, start: Position) -> io::Result<Option<ScanResult>> {
        match self.stream.read_char()? {
            Some('-') => {
                while let Some(c) = self.stream.read_char()? {
                    if c == '\n' {
                        break;
                    }
                }
                trace!(target: "micro::scanner", line = start.line, "Skipped comment");
                Ok(None)
            }
            Some(other) => {
                self.stream.unread(other);
                Ok(Some(self.single(TokenKind::MinusOp, '-', start)))
            }
            None => Ok(Some(self.single(TokenKind::MinusOp, '-', start))),
        }
    }
}

/// 字母：Unicode L* 类别（Lu Ll Lt Lm Lo）
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// 数字：Unicode Nd 类别
fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}
