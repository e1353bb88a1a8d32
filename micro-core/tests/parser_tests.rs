//! 识别器端到端测试

mod common;

use std::sync::Arc;

use common::{parse, scan_ok};
use micro_core::{ErrorBudget, MemorySink, Parser, Phase, StepError, TokenKind};

#[test]
fn test_full_program_accepted() {
    let outcome = parse("begin read(x,y); z:=x+y-1; write(z); end", 5);
    assert!(outcome.result.is_ok());
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_multiline_program_with_comments_accepted() {
    let source = r#"
-- sums two numbers
begin
    read(a, b);        -- input
    c := (a + b) - 10;
    write(c, a - (b), 3);
end
"#;
    let outcome = parse(source, 5);
    assert!(outcome.result.is_ok(), "{:?}", outcome.errors);
}

#[test]
fn test_missing_semicolon_is_not_resynchronized() {
    let tokens = scan_ok("begin x:=1 end");
    let sink = MemorySink::new();
    let mut budget = ErrorBudget::new(5, Arc::new(sink.clone()));
    let mut parser = Parser::new(tokens, &mut budget);

    let result = parser.parse();

    // 期望分号的位置消费了 `end`，随后匹配 `end` 时只剩输入结束
    assert_eq!(
        sink.lines(),
        vec![
            "error #1: parser: Expected ';' but found 'end'",
            "error #2: parser: Expected 'end' but found 'EOF'",
        ]
    );
    assert!(parser.cursor().is_exhausted());
    assert!(parser.cursor().current().is_none());
    assert!(matches!(result, Err(StepError::Exhausted { phase: Phase::Parser })));
}

#[test]
fn test_missing_semicolon_recovered_token_is_end() {
    let outcome = parse("begin x:=1 end", 1);

    // 预算为 1 时在第一处错误停止，报告的正是被误当作分号消费的 `end`
    assert_eq!(outcome.errors, vec!["error #1: parser: Expected ';' but found 'end'"]);
    assert!(outcome.result.is_err());
}

#[test]
fn test_empty_statement_list_rejected() {
    let outcome = parse("begin end", 5);
    assert!(outcome.result.is_err());
    assert_eq!(
        outcome.errors[0],
        "error #1: parser: Expected 'identifier, read, write' but found 'end'"
    );
}

#[test]
fn test_empty_input_rejected() {
    let outcome = parse("", 5);
    assert!(outcome.result.is_err());
    assert_eq!(
        outcome.errors[0],
        "error #1: parser: Expected 'begin' but found 'EOF'"
    );
}

#[test]
fn test_errors_cascade_until_budget() {
    // 早期一处错误会连锁引发后续看似无关的错误
    let outcome = parse("begin read x; write(y); end", 3);

    assert_eq!(
        outcome.errors,
        vec![
            "error #1: parser: Expected '(' but found 'x'",
            "error #2: parser: Expected 'identifier' but found ';'",
            "error #3: parser: Expected ')' but found 'write'",
        ]
    );
    assert!(matches!(
        outcome.result,
        Err(StepError::Exhausted { phase: Phase::Parser })
    ));
}

#[test]
fn test_trailing_comma_in_read_cascades_below_budget() {
    let outcome = parse("begin read(x,); end", 5);
    assert_eq!(
        outcome.errors,
        vec![
            "error #1: parser: Expected 'identifier' but found ')'",
            "error #2: parser: Expected ')' but found ';'",
            "error #3: parser: Expected ';' but found 'end'",
            "error #4: parser: Expected 'end' but found 'EOF'",
        ]
    );
    assert!(outcome.result.is_err());
}

#[test]
fn test_operator_without_operand() {
    let outcome = parse("begin x := 1 +; end", 5);
    assert_eq!(
        outcome.errors[0],
        "error #1: parser: Expected '(, identifier, integer' but found ';'"
    );
}

#[test]
fn test_keywords_are_not_identifiers_in_expressions() {
    let tokens = scan_ok("begin x := end; end");
    assert_eq!(tokens[3].kind, TokenKind::End);

    let outcome = parse("begin x := end; end", 5);
    assert!(outcome.result.is_err());
}
