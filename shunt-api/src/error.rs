//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 翻译阶段错误（括号不匹配、非法 token）
pub use shunt_core::SyntaxError;

/// 求值阶段错误
pub use shunt_core::EvaluationError;

/// Shunt 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShuntError {
    /// 中缀转后缀失败
    #[error("{0}")]
    Syntax(SyntaxError),

    /// 后缀求值失败
    #[error("{0}")]
    Evaluation(#[from] EvaluationError),

    /// 内部不变量被破坏，不是用户输入的问题
    #[error("Internal error: {0}")]
    Internal(String),

    /// 输入超过配置的长度上限
    #[error("Input too long: {len} characters, limit is {limit}")]
    InputTooLong { len: usize, limit: usize },
}

impl From<SyntaxError> for ShuntError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Internal(message) => ShuntError::Internal(message),
            other => ShuntError::Syntax(other),
        }
    }
}

impl ShuntError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            ShuntError::InputTooLong { .. } => "input",
            ShuntError::Syntax(_) => "translator",
            ShuntError::Evaluation(_) => "evaluator",
            ShuntError::Internal(_) => "internal",
        }
    }

    /// 错误类型名（可用于程序化处理）
    pub fn error_kind(&self) -> &'static str {
        match self {
            ShuntError::Syntax(e) => match e {
                SyntaxError::MissingOpen(_) => "MissingOpen",
                SyntaxError::MissingClose(_) => "MissingClose",
                SyntaxError::Mismatch { .. } => "Mismatch",
                SyntaxError::InvalidToken(_) => "InvalidToken",
                SyntaxError::Internal(_) => "Internal",
            },
            ShuntError::Evaluation(e) => match e {
                EvaluationError::InvalidToken(_) => "InvalidToken",
                EvaluationError::TooFewOperands(_) => "TooFewOperands",
                EvaluationError::DivisionByZero => "DivisionByZero",
                EvaluationError::RemainingOperands(_) => "RemainingOperands",
                EvaluationError::StackOverflow { .. } => "StackOverflow",
            },
            ShuntError::Internal(_) => "Internal",
            ShuntError::InputTooLong { .. } => "InputTooLong",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    ///
    /// # Example
    /// ```ignore
    /// match quick_run(source) {
    ///     Err(e) => {
    ///         let report = e.to_report();
    ///         println!("{}", report);
    ///         println!("{}", report.to_json());
    ///     }
    ///     Ok(value) => println!("{}", value),
    /// }
    /// ```
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            error_kind: self.error_kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: input, translator, evaluator, internal
    pub phase: &'static str,
    /// 错误类型
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} error: {}", self.phase, self.error_kind, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
