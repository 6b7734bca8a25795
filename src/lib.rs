pub mod cli;
pub mod core;

use std::path::Path;

use crate::core::DotenvStatus;

/// 启动日志里显示的程序名
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init() -> DotenvStatus {
    // 解析命令行参数之前把 .env 加载进进程环境；格式错误只在日志安装后给出警告
    DotenvStatus::load(Path::new(crate::core::environment::DOTENV_FILE))
}
