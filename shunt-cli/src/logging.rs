//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制，输出到 stderr。

use std::io;

use shunt_config::{LogConfig, LogLevel, Phase};
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// 初始化日志系统（每个进程只能调用一次）
pub fn init(log_config: &LogConfig) {
    let layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_writer(io::stderr)
        .with_filter(build_targets(log_config));

    tracing_subscriber::registry().with(layer).init();
}

/// 按阶段构建过滤规则
pub fn build_targets(log_config: &LogConfig) -> Targets {
    let global = to_level(log_config.global);
    [Phase::Lexer, Phase::Translator, Phase::Evaluator]
        .into_iter()
        .fold(Targets::new().with_default(global), |targets, phase| {
            targets.with_target(phase.target(), to_level(log_config.level_for(phase)))
        })
        .with_target("shunt::api", global)
        .with_target("shunt::cli", global)
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
