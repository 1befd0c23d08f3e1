//! Shunt Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Shunt crates.

use serde::Deserialize;
use std::str::FromStr;

/// Full configuration, as loaded from a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShuntConfig {
    /// Input and stack limits
    pub limits: LimitConfig,
    /// Per-phase log levels
    pub log: LogConfig,
}

/// Configuration for execution limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum expression length, in characters
    pub max_input_len: usize,
    /// Maximum operand stack depth during evaluation
    pub max_stack_size: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_input_len: 4096,
            max_stack_size: 1024,
        }
    }
}

/// Pipeline phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Translator,
    Evaluator,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Translator => "translator",
            Phase::Evaluator => "evaluator",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("shunt::{}", self.as_str())
    }
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[serde(alias = "silent")]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Error returned when a log level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogLevel(pub String);

impl std::fmt::Display for UnknownLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected silent, error, warn, info, debug or trace)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLogLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // silent = only errors
            "silent" | "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Global default level
    pub global: LogLevel,
    /// Lexer level (None falls back to global)
    pub lexer: Option<LogLevel>,
    /// Translator level
    pub translator: Option<LogLevel>,
    /// Evaluator level
    pub evaluator: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            translator: None,
            evaluator: None,
        }
    }
}

impl LogConfig {
    /// Effective level for a phase: the phase override if set, else the global level
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Translator => self.translator,
            Phase::Evaluator => self.evaluator,
        };
        specific.unwrap_or(self.global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_config() {
        let cfg = LimitConfig::default();
        assert_eq!(cfg.max_input_len, 4096);
        assert_eq!(cfg.max_stack_size, 1024);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Evaluator.target(), "shunt::evaluator");
    }

    #[test]
    fn test_log_level_for() {
        let cfg = LogConfig {
            global: LogLevel::Warn,
            lexer: Some(LogLevel::Debug),
            translator: None,
            evaluator: None,
        };

        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Debug);
        assert_eq!(cfg.level_for(Phase::Translator), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("silent".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Trace > LogLevel::Debug);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{ "limits": { "max_stack_size": 8 }, "log": { "global": "info", "lexer": "trace" } }"#;
        let cfg: ShuntConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.limits.max_stack_size, 8);
        assert_eq!(cfg.limits.max_input_len, 4096);
        assert_eq!(cfg.log.global, LogLevel::Info);
        assert_eq!(cfg.log.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.log.level_for(Phase::Evaluator), LogLevel::Info);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let cfg: ShuntConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ShuntConfig::default());
    }
}
