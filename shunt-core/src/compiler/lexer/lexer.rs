//! 词法分析器
//!
//! 单次从左到右扫描，一个字符的预读。词法异常不会中断扫描，
//! 而是作为 `Token::Invalid` 嵌入输出，由下一个阶段拒绝。
//!
//! # 示例
//!
//! ```
//! use shunt_core::compiler::lexer::{tokenize, Token, Operator};
//!
//! let tokens = tokenize("1 - -5");
//! assert_eq!(tokens[1], Token::Operator(Operator::Sub));
//! assert_eq!(tokens[2], Token::number("-5"));
//! ```

use std::iter::Peekable;
use std::str::Chars;

use tracing::{debug, trace};

use super::token::{Bracket, Operator, Token};

/// 数字格式错误时 `Invalid` token 的诊断信息
pub const INVALID_NUMBER: &str = "Invalid number";

/// 将表达式切分为 token 序列（不会失败）
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).tokenize()
}

/// 表达式词法分析器
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        trace!(target: "shunt::lexer", len = source.len(), "Creating new Lexer");
        Self {
            chars: source.chars().peekable(),
            tokens: Vec::new(),
        }
    }

    /// 扫描全部输入，返回 token 序列
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(&c) = self.chars.peek() {
            // 跳过空白符
            if c.is_whitespace() {
                self.chars.next();
                continue;
            }

            let token = if c.is_ascii_digit() || c == '.' || (c == '-' && self.sign_allowed()) {
                self.scan_number()
            } else {
                self.chars.next();
                Self::scan_symbol(c)
            };
            self.emit(token);
        }

        debug!(target: "shunt::lexer", count = self.tokens.len(), "Tokenize finished");
        self.tokens
    }

    fn emit(&mut self, token: Token) {
        match &token {
            Token::Invalid(message) => {
                debug!(target: "shunt::lexer", %message, "Produced invalid token");
            }
            _ => {
                trace!(target: "shunt::lexer", kind = ?token.kind(), text = %token, "Produced token");
            }
        }
        self.tokens.push(token);
    }

    /// `-` 作为符号位的条件：表达式开头，或前一个 token 是运算符/左括号
    fn sign_allowed(&self) -> bool {
        matches!(
            self.tokens.last(),
            None | Some(Token::Operator(_)) | Some(Token::Open(_))
        )
    }

    /// 扫描数字（整数或小数，可带符号位）
    fn scan_number(&mut self) -> Token {
        let mut text = String::new();

        // 符号位
        if self.chars.next_if_eq(&'-').is_some() {
            text.push('-');
            if self.chars.peek().is_none() {
                return Token::invalid(INVALID_NUMBER);
            }
        }

        let mut has_decimal = false;
        let mut has_digit = false;
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                has_digit = true;
            } else if c == '.' && !has_decimal {
                has_decimal = true;
            } else {
                break;
            }
            text.push(c);
            self.chars.next();
        }

        // 没有任何数字（"-"、"."、"-."）
        if has_digit {
            Token::Number(text)
        } else {
            Token::invalid(INVALID_NUMBER)
        }
    }

    /// 运算符、括号和非法字符
    fn scan_symbol(c: char) -> Token {
        match c {
            '(' => Token::Open(Bracket::Round),
            ')' => Token::Close(Bracket::Round),
            '[' => Token::Open(Bracket::Square),
            ']' => Token::Close(Bracket::Square),
            _ => match Operator::from_symbol(c) {
                Some(op) => Token::Operator(op),
                None => Token::invalid(format!("Invalid char: {c}")),
            },
        }
    }
}
