//! API 类型定义
//!
//! 转换和执行的输出类型。

use shunt_core::{join_tokens, Token};

/// 转换输出（中缀 → 后缀）
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateOutput {
    /// 词法分析得到的 token 序列
    pub tokens: Vec<Token>,
    /// 后缀（RPN）token 序列
    pub postfix: Vec<Token>,
}

impl TranslateOutput {
    /// 以空格连接的后缀表达式，如 `"3 4 +"`
    pub fn postfix_string(&self) -> String {
        join_tokens(&self.postfix)
    }
}

/// 执行输出
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteOutput {
    pub tokens: Vec<Token>,
    pub postfix: Vec<Token>,
    /// 求值结果
    pub value: f64,
}

impl ExecuteOutput {
    pub fn postfix_string(&self) -> String {
        join_tokens(&self.postfix)
    }
}

impl From<(TranslateOutput, f64)> for ExecuteOutput {
    fn from((translated, value): (TranslateOutput, f64)) -> Self {
        Self {
            tokens: translated.tokens,
            postfix: translated.postfix,
            value,
        }
    }
}
