//! Shunt API - Execution orchestration layer
//!
//! Provides unified execution interface, including:
//! - Pipeline orchestration (lexer → translator → evaluator)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (ShuntError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(source, &config)` API.

use tracing::{debug, info};

use shunt_core::{convert_to_postfix, Evaluator};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from shunt_config
pub use shunt_config::{LimitConfig, LogConfig, LogLevel, Phase, ShuntConfig};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorReport, EvaluationError, ShuntError, SyntaxError};
pub use types::{ExecuteOutput, TranslateOutput};

// Re-export core types
pub use shunt_config;
pub use shunt_core::{join_tokens, Bracket, Operator, Token, TokenKind};

/// Execute with explicit configuration
///
/// This is the recommended API for library users.
pub fn run(source: &str, config: &RunConfig) -> Result<ExecuteOutput, ShuntError> {
    info!(target: "shunt::api", "Starting execution");

    let translated = translate(source, config)?;
    let value = evaluate_postfix(&translated.postfix, config)?;

    info!(target: "shunt::api", value, "Execution completed");
    Ok(ExecuteOutput::from((translated, value)))
}

/// Lexing only. Never fails; bad input shows up as `Token::Invalid`.
pub fn tokenize(source: &str) -> Vec<Token> {
    shunt_core::tokenize(source)
}

/// Lex and convert to postfix
pub fn translate(source: &str, config: &RunConfig) -> Result<TranslateOutput, ShuntError> {
    check_input_len(source, config)?;

    let tokens = tokenize(source);
    if config.show_tokens {
        info!(target: "shunt::api", tokens = %join_tokens(&tokens), "Tokens");
    }

    let postfix = convert_to_postfix(&tokens)?;
    if config.show_postfix {
        info!(target: "shunt::api", postfix = %join_tokens(&postfix), "Postfix");
    }

    debug!(target: "shunt::api", tokens = tokens.len(), postfix = postfix.len(), "Translation completed");
    Ok(TranslateOutput { tokens, postfix })
}

/// Evaluate an already translated postfix sequence under the configured limits
pub fn evaluate_postfix(postfix: &[Token], config: &RunConfig) -> Result<f64, ShuntError> {
    let value = Evaluator::with_limits(&config.limits).evaluate(postfix)?;
    Ok(value)
}

fn check_input_len(source: &str, config: &RunConfig) -> Result<(), ShuntError> {
    let len = source.chars().count();
    let limit = config.limits.max_input_len;
    if len > limit {
        debug!(target: "shunt::api", len, limit, "Input rejected");
        return Err(ShuntError::InputTooLong { len, limit });
    }
    Ok(())
}

// ==================== Global singleton API (for CLI) ====================

/// Execute with the global configuration
pub fn compile_and_run(source: &str) -> Result<ExecuteOutput, ShuntError> {
    run(source, get_config())
}

/// Quick evaluation with default config, returning just the value
///
/// Auto-initializes the global config if needed.
pub fn quick_run(source: &str) -> Result<f64, ShuntError> {
    compile_and_run(source).map(|output| output.value)
}
