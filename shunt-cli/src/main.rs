//! Shunt CLI - Command line interface
//!
//! 计算一个表达式，或逐行计算标准输入中的表达式

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use shunt_api::{
    compile_and_run, init_config, tokenize, ExecuteOutput, RunConfig, ShuntConfig, ShuntError,
};
use shunt_config::LogLevel;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::load_config;
use crate::platform::{print_error, render_json};

/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "shunt",
    about = "Evaluate arithmetic expressions with the shunting-yard algorithm",
    version = "0.1.0"
)]
struct Cli {
    /// Expression to evaluate (reads lines from stdin when omitted)
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the token list
    #[arg(long)]
    tokens: bool,

    /// Print the postfix expression
    #[arg(long)]
    postfix: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() {
    let cli = Cli::parse();

    let mut shunt_config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => ShuntConfig::default(),
    };
    if let Some(level) = cli.log_level {
        shunt_config.log.global = level;
    }

    logging::init(&shunt_config.log);
    debug!(target: "shunt::cli", config = ?shunt_config, "Configuration loaded");

    // Initialize API config (global singleton for convenience)
    let run_config = RunConfig {
        show_tokens: cli.tokens,
        show_postfix: cli.postfix,
        ..RunConfig::from(&shunt_config)
    };
    if init_config(run_config).is_err() {
        debug!(target: "shunt::cli", "Global config already initialized");
    }

    let all_ok = match &cli.expression {
        Some(expression) => evaluate(expression, &cli),
        None => evaluate_lines(io::stdin().lock(), &cli).all_ok(),
    };

    if !all_ok {
        process::exit(1);
    }
}

/// 逐行计算的统计
#[derive(Debug, Default, PartialEq, Eq)]
struct LineStats {
    /// 已计算的表达式数（不含空行）
    evaluated: usize,
    /// 失败数，包括读取失败的行
    failed: usize,
}

impl LineStats {
    fn all_ok(&self) -> bool {
        self.failed == 0
    }
}

/// 逐行计算，跳过空行
///
/// 非 UTF-8 的行报告后继续读取；其他读取错误会终止循环。
fn evaluate_lines<R: BufRead>(reader: R, cli: &Cli) -> LineStats {
    let mut stats = LineStats::default();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: {}", e);
                stats.failed += 1;
                if e.kind() == io::ErrorKind::InvalidData {
                    continue;
                }
                break;
            }
        };

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        stats.evaluated += 1;
        if !evaluate(expression, cli) {
            stats.failed += 1;
        }
    }

    info!(target: "shunt::cli", evaluated = stats.evaluated, failed = stats.failed, "Finished reading input");
    stats
}

/// 计算单个表达式并按格式输出，返回是否成功
fn evaluate(expression: &str, cli: &Cli) -> bool {
    let result = compile_and_run(expression);

    match cli.format {
        OutputFormat::Json => println!("{}", render_json(expression, &result)),
        OutputFormat::Text => {
            for line in render_text(expression, &result, cli) {
                println!("{}", line);
            }
            if let Err(e) = &result {
                print_error(e);
            }
        }
    }

    result.is_ok()
}

/// 文本模式下写到 stdout 的行（错误另行输出到 stderr）
fn render_text(
    expression: &str,
    result: &Result<ExecuteOutput, ShuntError>,
    cli: &Cli,
) -> Vec<String> {
    let mut lines = Vec::new();
    if cli.tokens {
        lines.push(format!("tokens: [{}]", format_token_list(expression)));
    }
    if let Ok(output) = result {
        if cli.postfix {
            lines.push(format!("postfix: {}", output.postfix_string()));
        }
        lines.push(output.value.to_string());
    }
    lines
}

/// 逗号分隔的 token 列表，如 `3, +, 4`
fn format_token_list(expression: &str) -> String {
    tokenize(expression)
        .iter()
        .map(|t| t.text())
        .collect::<Vec<_>>()
        .join(", ")
}
