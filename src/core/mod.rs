pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod outcome;

// 重新导出 config 模块中的公共 API
pub use config::{Config, DEFAULT_CONFIG_FILE};

// 重新导出 environment 模块中的公共 API
pub use environment::{load_dotenv, read_app_env, read_shell, DotenvStatus, EnvLookup, ProcessEnv};

pub use error::{ConfigError, EnvironmentError};
pub use logging::{LogContext, LogLevel};
pub use outcome::Outcome;
