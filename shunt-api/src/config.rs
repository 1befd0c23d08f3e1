//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use shunt_config::{LimitConfig, ShuntConfig};

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Input and stack limits
    pub limits: LimitConfig,
    /// Log the token list after lexing
    pub show_tokens: bool,
    /// Log the postfix expression after translation
    pub show_postfix: bool,
}

impl From<&ShuntConfig> for RunConfig {
    fn from(config: &ShuntConfig) -> Self {
        Self {
            limits: config.limits.clone(),
            ..Self::default()
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Returns the rejected config if the global one was already set.
pub fn init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get global config reference, initializing it with defaults on first use
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
