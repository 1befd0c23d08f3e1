//! CLI 配置
//!
//! 从 JSON 文件加载 `ShuntConfig`，缺失字段使用默认值

use std::io;
use std::path::Path;

use shunt_config::ShuntConfig;

/// Read and parse a config file
pub fn load_config(path: &Path) -> Result<ShuntConfig, String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("config file '{}' not found", path.display()),
        _ => format!("cannot read '{}': {}", path.display(), e),
    })?;

    parse_config(&content).map_err(|e| format!("failed to parse '{}': {}", path.display(), e))
}

fn parse_config(content: &str) -> Result<ShuntConfig, serde_json::Error> {
    serde_json::from_str(content)
}
