//! 错误类型
//!
//! 模板只有两类预期失败：配置文件加载失败和环境变量读取失败。
//! 两者都不会重试，由调用方记录日志后转换为退出码。

use std::path::PathBuf;

use thiserror::Error;

/// 配置文件读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 文件不存在或不可读
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 内容不是合法的 JSON
    #[error("invalid JSON in config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON 合法但顶层不是对象（例如 `null` 或数组）
    #[error("config file {} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    /// 回写失败
    #[error("could not write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// 出错的配置文件路径
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::NotAnObject { path }
            | Self::Write { path, .. } => path,
        }
    }
}

/// 环境变量读取错误
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// 变量缺失或不是合法的 UTF-8
    #[error("could not read environment variable {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::env::VarError,
    },

    /// `.env` 文件存在但无法解析
    #[error("could not load {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
