//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use shunt_core::{convert_to_postfix, evaluate, join_tokens, tokenize};
use shunt_core::{EvaluationError, SyntaxError};

/// 浮点比较容差
pub const DELTA: f64 = 1e-6;

/// 执行表达式并返回结果（完整流程：词法 + 转换 + 求值）
///
/// # Example
/// ```ignore
/// let value = run_code("1 + 2").unwrap();
/// assert_close(value, 3.0);
/// ```
pub fn run_code(code: &str) -> Result<f64, ExecError> {
    let tokens = tokenize(code);
    let postfix = convert_to_postfix(&tokens).map_err(ExecError::Syntax)?;
    evaluate(&postfix).map_err(ExecError::Evaluation)
}

/// 返回后缀表达式字符串
pub fn postfix_of(code: &str) -> Result<String, SyntaxError> {
    convert_to_postfix(&tokenize(code)).map(|tokens| join_tokens(&tokens))
}

/// 执行错误
#[derive(Debug, PartialEq)]
pub enum ExecError {
    Syntax(SyntaxError),
    Evaluation(EvaluationError),
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::Syntax(e) => write!(f, "Syntax error: {}", e),
            ExecError::Evaluation(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for ExecError {}

/// 断言两个浮点数在容差内相等
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < DELTA,
        "expected {expected}, got {actual}"
    );
}
