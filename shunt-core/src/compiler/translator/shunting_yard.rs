//! Shunting-yard 算法：中缀 token 序列 → 后缀（RPN）token 序列
//!
//! 在经典算法之上增加了两点：
//! - 圆括号和方括号两个括号族，交叉闭合会报告期望的括号类型
//! - 结合性取决于运算符本身（`^` 右结合，其余左结合）
//!
//! 例：`3 + 4 * 2 / ( 1 - 5 )` → `3 4 2 * 1 5 - / +`

use tracing::{debug, trace};

use super::error::SyntaxError;
use crate::compiler::lexer::{Bracket, Operator, Token};
use crate::kit::Stack;

/// 转换为后缀表达式
pub fn convert_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    ShuntingYard::new().convert(tokens)
}

/// 单次转换的状态：输出序列 + 运算符/括号栈
pub struct ShuntingYard {
    output: Vec<Token>,
    stack: Stack<Token>,
}

impl ShuntingYard {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            stack: Stack::new(),
        }
    }

    /// 消费状态，执行转换
    pub fn convert(mut self, tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
        debug!(target: "shunt::translator", count = tokens.len(), "Starting shunting yard");

        for token in tokens {
            match token {
                // 数字直接进入输出
                Token::Number(_) => self.output.push(token.clone()),
                Token::Operator(op) => self.push_operator(*op),
                // 左括号无条件入栈
                Token::Open(_) => self.stack.push(token.clone()),
                Token::Close(bracket) => self.close_bracket(*bracket)?,
                Token::Invalid(text) => {
                    debug!(target: "shunt::translator", %text, "Rejecting invalid token");
                    return Err(SyntaxError::InvalidToken(text.clone()));
                }
            }
        }

        self.drain()
    }

    /// 栈顶 o2 优先级更高，或同级且 o1 左结合时，先弹出 o2
    fn push_operator(&mut self, o1: Operator) {
        while let Some(&Token::Operator(o2)) = self.stack.peek() {
            let p1 = o1.precedence();
            let p2 = o2.precedence();
            if p2 > p1 || (p2 == p1 && o1.is_left_associative()) {
                self.pop_to_output();
            } else {
                break;
            }
        }
        trace!(target: "shunt::translator", op = %o1, depth = self.stack.len(), "Push operator");
        self.stack.push(Token::Operator(o1));
    }

    /// 处理右括号：两个括号族共用同一套匹配逻辑
    fn close_bracket(&mut self, found: Bracket) -> Result<(), SyntaxError> {
        while matches!(self.stack.peek(), Some(Token::Operator(_))) {
            self.pop_to_output();
        }

        match self.stack.peek().cloned() {
            None => Err(SyntaxError::MissingOpen(found)),
            Some(Token::Open(open)) if open == found => {
                self.stack.pop();
                trace!(target: "shunt::translator", bracket = %found.closer(), "Matched bracket");
                Ok(())
            }
            Some(Token::Open(open)) => Err(SyntaxError::Mismatch {
                expected: open,
                found,
            }),
            Some(other) => Err(SyntaxError::Internal(format!(
                "unexpected token '{other}' on operator stack"
            ))),
        }
    }

    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            trace!(target: "shunt::translator", token = %token, "Pop to output");
            self.output.push(token);
        }
    }

    /// 输入结束：剩余运算符全部进入输出，残留左括号即未闭合
    fn drain(mut self) -> Result<Vec<Token>, SyntaxError> {
        while let Some(token) = self.stack.pop() {
            match token {
                Token::Operator(_) => self.output.push(token),
                Token::Open(bracket) => return Err(SyntaxError::MissingClose(bracket)),
                Token::Close(bracket) => {
                    return Err(SyntaxError::Internal(format!(
                        "closing bracket '{}' left on operator stack",
                        bracket.closer()
                    )))
                }
                Token::Number(_) | Token::Invalid(_) => {
                    return Err(SyntaxError::Internal(format!(
                        "operand '{token}' left on operator stack"
                    )))
                }
            }
        }

        debug!(target: "shunt::translator", count = self.output.len(), "Shunting yard finished");
        Ok(self.output)
    }
}

impl Default for ShuntingYard {
    fn default() -> Self {
        Self::new()
    }
}
