//! 后缀表达式求值器
//!
//! 基于操作数栈从左到右归约：数字入栈，运算符弹出两个操作数
//! 并压回结果，最终栈上必须恰好剩一个值。

use shunt_config::LimitConfig;
use tracing::{debug, trace};

use super::error::EvaluationError;
use super::operators::apply;
use crate::compiler::lexer::{Operator, Token};
use crate::kit::Stack;

/// 求值后缀 token 序列（不限制栈深度）
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvaluationError> {
    Evaluator::new().evaluate(tokens)
}

/// 求值器；可选地限制操作数栈深度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    max_stack_size: Option<usize>,
}

impl Evaluator {
    /// 不限制栈深度
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用配置中的 `max_stack_size`
    pub fn with_limits(limits: &LimitConfig) -> Self {
        Self {
            max_stack_size: Some(limits.max_stack_size),
        }
    }

    pub fn max_stack_size(&self) -> Option<usize> {
        self.max_stack_size
    }

    pub fn evaluate(&self, tokens: &[Token]) -> Result<f64, EvaluationError> {
        debug!(target: "shunt::evaluator", count = tokens.len(), "Starting evaluation");
        // 操作数个数不超过 token 数
        let mut stack: Stack<f64> = Stack::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Number(text) => {
                    let value = text
                        .parse::<f64>()
                        .map_err(|_| EvaluationError::InvalidToken(text.clone()))?;
                    self.push(&mut stack, value)?;
                }
                Token::Operator(op) => {
                    let (a, b) = pop_two(&mut stack, *op)?;
                    let result = apply(*op, a, b)?;
                    trace!(target: "shunt::evaluator", a, op = %op, b, result, "Applied operator");
                    stack.push(result);
                }
                Token::Open(_) | Token::Close(_) | Token::Invalid(_) => {
                    return Err(EvaluationError::InvalidToken(token.text()));
                }
            }
        }

        if stack.len() != 1 {
            return Err(EvaluationError::RemainingOperands(stack.len()));
        }
        let value = stack.pop().ok_or(EvaluationError::RemainingOperands(0))?;
        debug!(target: "shunt::evaluator", value, "Evaluation finished");
        Ok(value)
    }

    fn push(&self, stack: &mut Stack<f64>, value: f64) -> Result<(), EvaluationError> {
        if let Some(limit) = self.max_stack_size {
            if stack.len() >= limit {
                return Err(EvaluationError::StackOverflow { limit });
            }
        }
        stack.push(value);
        Ok(())
    }
}

/// 弹出两个值（先弹出的是右操作数）
fn pop_two(stack: &mut Stack<f64>, op: Operator) -> Result<(f64, f64), EvaluationError> {
    if stack.len() < 2 {
        return Err(EvaluationError::TooFewOperands(op));
    }
    match (stack.pop(), stack.pop()) {
        (Some(b), Some(a)) => Ok((a, b)),
        _ => Err(EvaluationError::TooFewOperands(op)),
    }
}
