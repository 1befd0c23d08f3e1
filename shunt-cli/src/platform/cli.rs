//! CLI 格式化输出
//!
//! 文本模式下的错误显示，以及 JSON 模式下每个表达式的结果对象。

use serde_json::{json, Value};
use shunt_api::{tokenize, ExecuteOutput, ShuntError};

/// 打印错误到 stderr
pub fn print_error(e: &ShuntError) {
    eprintln!("error: {}", e);
}

/// 构建单个表达式的 JSON 结果
///
/// 成功时包含 `tokens`、`postfix` 和 `value`，失败时包含 `error`（结构化报告）。
pub fn render_json(expression: &str, result: &Result<ExecuteOutput, ShuntError>) -> Value {
    match result {
        Ok(output) => json!({
            "expression": expression,
            "tokens": output
                .tokens
                .iter()
                .map(|t| json!({ "kind": t.kind().as_str(), "text": t.text() }))
                .collect::<Vec<_>>(),
            "postfix": output.postfix_string(),
            "value": output.value,
        }),
        Err(e) => json!({
            "expression": expression,
            "tokens": tokenize(expression)
                .iter()
                .map(|t| json!({ "kind": t.kind().as_str(), "text": t.text() }))
                .collect::<Vec<_>>(),
            "error": e.to_report(),
        }),
    }
}
