//! 词法分析：表达式文本 → token 序列

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer, INVALID_NUMBER};
pub use token::{
    join_tokens, precedence_of, Associativity, Bracket, Operator, Token, TokenKind, PRECEDENCE,
};
