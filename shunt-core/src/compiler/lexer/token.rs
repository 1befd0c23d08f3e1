//! Shunt Token 类型定义
//!
//! Token 是各阶段之间传递的唯一数据：词法分析器产出，
//! 翻译器重排，求值器消费。Token 不携带位置信息。

use std::fmt;

/// 括号族：圆括号 `( )` 与方括号 `[ ]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Round,
    Square,
}

impl Bracket {
    /// 左括号字符
    pub fn opener(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
        }
    }

    /// 右括号字符
    pub fn closer(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
        }
    }
}

/// 结合性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// 二元运算符（元数均为 2）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// 从单个字符识别运算符
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// 优先级：越高绑定越紧
    pub fn precedence(self) -> u8 {
        precedence_of(self.symbol())
    }

    /// 结合性是符号的固有属性，与优先级无关
    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Pow => Associativity::Right,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => Associativity::Left,
        }
    }

    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 运算符优先级表（编译期常量，只读共享）
pub const PRECEDENCE: [(char, u8); 5] = [('+', 1), ('-', 1), ('*', 2), ('/', 2), ('^', 3)];

/// 按符号查优先级，未知符号返回 0
pub fn precedence_of(symbol: char) -> u8 {
    PRECEDENCE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, p)| *p)
        .unwrap_or(0)
}

/// Token 的扁平分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
    LeftParenRound,
    LeftParenSquare,
    RightParenRound,
    RightParenSquare,
    Invalid,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::LeftParenRound => "left_paren_round",
            TokenKind::LeftParenSquare => "left_paren_square",
            TokenKind::RightParenRound => "right_paren_round",
            TokenKind::RightParenSquare => "right_paren_square",
            TokenKind::Invalid => "invalid",
        }
    }
}

/// 词法单元
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// 数字字面量原文，可带一个前导 `-`（如 `"42"`、`"-3.5"`）
    Number(String),
    Operator(Operator),
    /// 左括号
    Open(Bracket),
    /// 右括号
    Close(Bracket),
    /// 词法异常，内容为诊断信息（如 `"Invalid char: $"`）
    Invalid(String),
}

impl Token {
    pub fn number(text: impl Into<String>) -> Self {
        Token::Number(text.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Token::Invalid(message.into())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Open(Bracket::Round) => TokenKind::LeftParenRound,
            Token::Open(Bracket::Square) => TokenKind::LeftParenSquare,
            Token::Close(Bracket::Round) => TokenKind::RightParenRound,
            Token::Close(Bracket::Square) => TokenKind::RightParenSquare,
            Token::Invalid(_) => TokenKind::Invalid,
        }
    }

    /// 字面文本；`Invalid` 返回诊断信息
    pub fn text(&self) -> String {
        match self {
            Token::Number(text) | Token::Invalid(text) => text.clone(),
            Token::Operator(op) => op.symbol().to_string(),
            Token::Open(bracket) => bracket.opener().to_string(),
            Token::Close(bracket) => bracket.closer().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Invalid(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Open(bracket) => write!(f, "{}", bracket.opener()),
            Token::Close(bracket) => write!(f, "{}", bracket.closer()),
        }
    }
}

/// 以空格连接 token 文本（如 `"3 4 2 * +"`）
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
