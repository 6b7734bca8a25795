//! 配置文件模块
//!
//! 配置是一个 JSON 对象，键为字符串，值为任意 JSON：
//!
//! ```json
//! {
//!   "test": "x"
//! }
//! ```
//!
//! 启动时读取一次，运行成功后原样写回。写回时保留键的顺序。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use super::error::ConfigError;

/// 默认配置文件名，相对于当前工作目录
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// 模板读取的配置键
pub const TEST_KEY: &str = "test";

/// 配置映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: Map<String, Value>,
}

impl Config {
    /// 从文件加载配置
    ///
    /// # Arguments
    ///
    /// * `path` - 配置文件路径
    ///
    /// # Errors
    ///
    /// 文件缺失、不可读、不是合法 JSON 或顶层不是对象时返回 [`ConfigError`]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// 保存配置到文件
    ///
    /// 即使内容未变也会截断并重写文件。
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// 获取某个键的值
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// `test` 键的值，用于日志输出
    pub fn test_value(&self) -> Option<&Value> {
        self.get(TEST_KEY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按文件中的顺序遍历键
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

/// 日志里展示一个 JSON 值：字符串不带引号，缺失显示为 `None`
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "None".to_string(),
    }
}
