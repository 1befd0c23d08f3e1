//! Shunt 运行时
//!
//! 后缀表达式求值：操作数栈 + 运算符实现。

/// 错误类型
pub mod error;

/// 运算符实现
pub mod operators;

/// 求值器
pub mod evaluator;

pub use error::EvaluationError;
pub use evaluator::{evaluate, Evaluator};
