//! Shunt Core - Expression pipeline (pure logic, no IO)
//!
//! Contains the lexer, the shunting-yard translator, and the postfix evaluator.
//! Only operates on in-memory token sequences, no file IO or terminal output.
//!
//! ```text
//! text ──tokenize──▶ tokens ──convert_to_postfix──▶ postfix ──evaluate──▶ f64
//! ```
//!
//! Every call is independent: stacks and sequences are local to the call,
//! and the only shared data is the read-only precedence table.
//!
//! # Example
//!
//! ```
//! use shunt_core::{convert_to_postfix, evaluate, join_tokens, tokenize};
//!
//! let tokens = tokenize("3 + 4 * 2 / ( 1 - 5 )");
//! let postfix = convert_to_postfix(&tokens).unwrap();
//! assert_eq!(join_tokens(&postfix), "3 4 2 * 1 5 - / +");
//! assert!((evaluate(&postfix).unwrap() - 1.0).abs() < 1e-6);
//! ```

pub mod compiler;
pub mod kit;
pub mod runtime;

// Re-export common types
pub use compiler::lexer::{
    join_tokens, tokenize, Associativity, Bracket, Lexer, Operator, Token, TokenKind,
};
pub use compiler::translator::{convert_to_postfix, ShuntingYard, SyntaxError};
pub use kit::Stack;
pub use runtime::{evaluate, EvaluationError, Evaluator};

// Re-export config types from shunt-config
pub use shunt_config::{LimitConfig, Phase};
