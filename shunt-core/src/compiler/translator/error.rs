//! 翻译阶段错误类型

use thiserror::Error;

use crate::compiler::lexer::Bracket;

/// 中缀转后缀失败的原因
///
/// 每个括号相关的变体都带着具体的括号，诊断信息里会出现对应字符。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// 右括号没有对应的左括号
    #[error("Mismatched parentheses: Missing '{}'", .0.opener())]
    MissingOpen(Bracket),

    /// 左括号直到输入结束都没有闭合
    #[error("Mismatched parentheses: Missing '{}'", .0.closer())]
    MissingClose(Bracket),

    /// 括号类型交叉匹配，如 `[ 2 )`
    #[error(
        "Mismatched parentheses: Expected '{}', found '{}'",
        .expected.closer(),
        .found.closer()
    )]
    Mismatch { expected: Bracket, found: Bracket },

    /// 词法阶段产生的 `Invalid` token
    #[error("Invalid token encountered: {0}")]
    InvalidToken(String),

    /// 内部不变量被破坏（逻辑缺陷，而非用户输入错误）
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyntaxError {
    /// 是否为内部不变量错误
    pub fn is_internal(&self) -> bool {
        matches!(self, SyntaxError::Internal(_))
    }
}
