//! 运算符实现

use super::error::EvaluationError;
use crate::compiler::lexer::Operator;

/// 计算 `a <op> b`（a 是先入栈的左操作数）
pub fn apply(op: Operator, a: f64, b: f64) -> Result<f64, EvaluationError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        }
        Operator::Pow => Ok(a.powf(b)),
    }
}
