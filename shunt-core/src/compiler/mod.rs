//! 前端：词法分析 + 中缀转后缀

pub mod lexer;
pub mod translator;
