//! 求值阶段错误类型

use thiserror::Error;

use crate::compiler::lexer::Operator;

/// 后缀表达式求值失败的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// 非数字/运算符的 token，或无法解析的数字字面量
    #[error("Invalid token in expression: {0}")]
    InvalidToken(String),

    /// 运算符执行时栈上不足两个操作数
    #[error("Too few operands for operator: {0}")]
    TooFewOperands(Operator),

    #[error("Division by zero")]
    DivisionByZero,

    /// 结束时栈上不是恰好一个值（包括空输入时的 0）
    #[error("Invalid expression: {0} elements remain on the stack, expected 1")]
    RemainingOperands(usize),

    /// 操作数栈超出配置的上限
    #[error("Operand stack overflow: more than {limit} operands")]
    StackOverflow { limit: usize },
}
