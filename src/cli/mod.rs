use clap::Parser;
use std::path::PathBuf;

use crate::core::{LogLevel, DEFAULT_CONFIG_FILE};

pub mod commands;

/// Minimal script template: logging, flags, JSON config and environment
#[derive(Parser, Debug)]
#[command(name = "template")]
#[command(about = "Minimal script template: logging, flags, JSON config and environment")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Report version only
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Run in debug mode for logging
    #[arg(short, long)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the JSON configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Do not rewrite the configuration file at the end of the run
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit with status 1 after a successful environment read, before persisting
    #[arg(long)]
    pub legacy_guard: bool,
}

impl Cli {
    /// `--debug` 与 `--quiet` 互斥
    pub fn has_conflicting_levels(&self) -> bool {
        self.debug && self.quiet
    }
}

/// 受保护的环境变量读取成功后怎么做
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardPolicy {
    /// 只在读取真正失败时以 1 退出
    #[default]
    ExitOnFailure,
    /// 读取成功后同样以 1 退出，不回写配置
    AlwaysExit,
}

/// 启动时从命令行构造一次，之后贯穿整个运行过程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub log_level: LogLevel,
    pub version_only: bool,
    pub persist: bool,
    pub guard: GuardPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            log_level: LogLevel::default(),
            version_only: false,
            persist: true,
            guard: GuardPolicy::default(),
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            log_level: LogLevel::from_flags(cli.debug, cli.quiet),
            version_only: cli.version,
            persist: !cli.dry_run,
            guard: if cli.legacy_guard {
                GuardPolicy::AlwaysExit
            } else {
                GuardPolicy::ExitOnFailure
            },
        }
    }
}
