//! 端到端测试：词法 → 后缀 → 求值

mod common;
use common::{assert_close, postfix_of, run_code, ExecError};
use shunt_core::{
    convert_to_postfix, evaluate, tokenize, Bracket, EvaluationError, Operator, SyntaxError,
    Token,
};

// ===== 示例表达式 =====

#[test]
fn test_example_expression_end_to_end() {
    let tokens = tokenize("3 + 4 * 2 / ( 1 - 5 )");
    assert_eq!(tokens.len(), 11);

    let postfix = convert_to_postfix(&tokens).unwrap();
    assert_eq!(postfix_of("3 + 4 * 2 / ( 1 - 5 )").unwrap(), "3 4 2 * 1 5 - / +");

    assert_close(evaluate(&postfix).unwrap(), 1.0);
}

// ===== 优先级与结合性 =====

#[test]
fn test_operator_precedence() {
    assert_close(run_code("2 + 3 * 4").unwrap(), 14.0);
    assert_close(run_code("(2 + 3) * 4").unwrap(), 20.0);
    assert_close(run_code("2 * 3 ^ 2").unwrap(), 18.0);
}

#[test]
fn test_left_associativity() {
    assert_close(run_code("1 - 2 + 3").unwrap(), 2.0);
    assert_close(run_code("100 / 10 / 5").unwrap(), 2.0);
    assert_close(run_code("10 - 5 - 2").unwrap(), 3.0);
}

#[test]
fn test_right_associativity() {
    // 2 ^ (3 ^ 2) = 512，而非 (2 ^ 3) ^ 2 = 64
    assert_close(run_code("2 ^ 3 ^ 2").unwrap(), 512.0);
}

// ===== 括号 =====

#[test]
fn test_mixed_brackets() {
    assert_close(run_code("[ ( 4 + 2 ) ^ 2 ] / 3").unwrap(), 12.0);
    assert_close(run_code("3 + [ 4 * ( 2 - 1 ) ]").unwrap(), 7.0);
}

#[test]
fn test_deeply_nested_brackets() {
    assert_close(run_code("[([([1])])] + ((((2))))").unwrap(), 3.0);
}

#[test]
fn test_bracket_errors() {
    assert_eq!(
        run_code("1 + [ 2 )"),
        Err(ExecError::Syntax(SyntaxError::Mismatch {
            expected: Bracket::Square,
            found: Bracket::Round,
        }))
    );
    assert_eq!(
        run_code("1 + ( 2 * 3"),
        Err(ExecError::Syntax(SyntaxError::MissingClose(Bracket::Round)))
    );
    assert_eq!(
        run_code("1 + 2 ]"),
        Err(ExecError::Syntax(SyntaxError::MissingOpen(Bracket::Square)))
    );
}

#[test]
fn test_unclosed_bracket_message() {
    let err = run_code("1 + ( 2 * 3").unwrap_err();
    assert!(err.to_string().contains("Missing ')'"));
}

// ===== 符号位 =====

#[test]
fn test_signed_numbers() {
    assert_close(run_code("1 - -5 + (-3.2)").unwrap(), 2.8);
    assert_close(run_code("-2 ^ 2").unwrap(), 4.0);
    assert_close(run_code("[-1] * -1").unwrap(), 1.0);
}

#[test]
fn test_sign_disambiguation_tokens() {
    assert_eq!(
        tokenize("1 - -5 + (-3.2)"),
        vec![
            Token::number("1"),
            Token::Operator(Operator::Sub),
            Token::number("-5"),
            Token::Operator(Operator::Add),
            Token::Open(Bracket::Round),
            Token::number("-3.2"),
            Token::Close(Bracket::Round),
        ]
    );
}

// ===== 错误传播 =====

#[test]
fn test_invalid_char_is_caught_by_translator() {
    let err = run_code("2 * $").unwrap_err();
    assert_eq!(
        err,
        ExecError::Syntax(SyntaxError::InvalidToken("Invalid char: $".to_string()))
    );
}

#[test]
fn test_invalid_number_is_caught_by_translator() {
    let err = run_code("3 * -").unwrap_err();
    assert!(err.to_string().contains("Invalid number"));
}

#[test]
fn test_dangling_operator_fails_in_evaluator() {
    assert_eq!(
        run_code("1 +"),
        Err(ExecError::Evaluation(EvaluationError::TooFewOperands(
            Operator::Add
        )))
    );
}

#[test]
fn test_adjacent_numbers_fail_in_evaluator() {
    assert_eq!(
        run_code("1 2"),
        Err(ExecError::Evaluation(EvaluationError::RemainingOperands(2)))
    );
}

#[test]
fn test_division_by_zero_end_to_end() {
    assert_eq!(
        run_code("1 / (2 - 2)"),
        Err(ExecError::Evaluation(EvaluationError::DivisionByZero))
    );
}

#[test]
fn test_empty_expression() {
    assert_eq!(
        run_code("   "),
        Err(ExecError::Evaluation(EvaluationError::RemainingOperands(0)))
    );
}
