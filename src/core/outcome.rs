//! 运行结果与退出码

use std::process::ExitCode;

/// 一次运行的终止状态
///
/// 所有状态都是终态，没有重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 正常完成
    Completed,
    /// `--version`：不加载配置直接退出
    VersionReported,
    /// 同时给出 `--debug` 和 `--quiet`：打印用法后退出
    ConflictingFlags,
    /// 配置文件加载失败
    ConfigLoadFailed,
    /// 受保护的环境变量读取路径
    EnvironmentGuardExit,
    /// 配置回写失败
    ConfigSaveFailed,
}

impl Outcome {
    /// 进程退出状态
    ///
    /// 配置加载失败对应 `exit(-1)`，在 Unix 上即 255。
    pub fn code(self) -> u8 {
        match self {
            Self::Completed | Self::VersionReported | Self::ConflictingFlags => 0,
            Self::ConfigLoadFailed => 255,
            Self::EnvironmentGuardExit | Self::ConfigSaveFailed => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self.code() == 0
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
