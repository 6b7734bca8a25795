//! 环境变量模块
//!
//! - 启动时把 `.env` 文件加载进进程环境（不覆盖已有变量）
//! - 受保护地读取 `SHELL`
//! - 读取应用变量 `ENV`

use std::env::VarError;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::EnvironmentError;

/// 默认的 `.env` 文件名
pub const DOTENV_FILE: &str = ".env";

/// 操作系统提供的 shell 路径
pub const SHELL_VAR: &str = "SHELL";

/// 通常来自 `.env` 的应用变量
pub const APP_ENV_VAR: &str = "ENV";

/// 加载 `.env` 文件
///
/// 文件不存在时什么也不做并返回 `Ok(false)`；
/// 文件存在但格式错误时返回错误。
pub fn load_dotenv(path: &Path) -> Result<bool, EnvironmentError> {
    if !path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|source| EnvironmentError::Dotenv {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// `.env` 加载结果
///
/// 加载发生在日志安装之前，结果先保存下来，安装日志后再用 [`DotenvStatus::report`] 输出。
/// 格式错误不是致命错误，只记录一条警告。
#[derive(Debug)]
pub enum DotenvStatus {
    Missing(PathBuf),
    Loaded(PathBuf),
    Invalid(EnvironmentError),
}

impl DotenvStatus {
    /// 加载 `.env`，把错误转换为 [`DotenvStatus::Invalid`]
    pub fn load(path: &Path) -> Self {
        match load_dotenv(path) {
            Ok(true) => Self::Loaded(path.to_path_buf()),
            Ok(false) => Self::Missing(path.to_path_buf()),
            Err(e) => Self::Invalid(e),
        }
    }

    /// 把加载结果写入当前日志
    pub fn report(&self) {
        match self {
            Self::Missing(path) => debug!("No {} file found", path.display()),
            Self::Loaded(path) => debug!("Loaded {}", path.display()),
            Self::Invalid(e) => warn!("Ignoring {}", e),
        }
    }
}

/// 读取环境变量的方式，便于测试时替换进程环境
pub trait EnvLookup {
    fn var(&self, name: &str) -> Result<String, VarError>;
}

/// 直接读取当前进程环境
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        std::env::var(name)
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Result<String, VarError>,
{
    fn var(&self, name: &str) -> Result<String, VarError> {
        self(name)
    }
}

/// 受保护地读取 `SHELL`
///
/// 变量缺失或不是 UTF-8 时返回 [`EnvironmentError::Read`]。
pub fn read_shell(env: &dyn EnvLookup) -> Result<String, EnvironmentError> {
    env.var(SHELL_VAR).map_err(|source| EnvironmentError::Read {
        name: SHELL_VAR.to_string(),
        source,
    })
}

/// 读取 `ENV`，未设置时返回 `None`
pub fn read_app_env(env: &dyn EnvLookup) -> Option<String> {
    env.var(APP_ENV_VAR).ok()
}
