//! 日志模块
//!
//! 单一输出、带时间戳、分级的日志。每行格式：
//!
//! ```text
//! 2022-06-14 09:30:00,123 INFO     Starting...
//! ```
//!
//! 级别名称左对齐填充到 8 列，`WARN` 显示为 `WARNING`。
//! [`LogContext`] 由入口显式构造并安装，返回的守卫析构后恢复之前的订阅者。

use std::fmt;

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// 默认时间戳格式（chrono 语法），毫秒用逗号分隔
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// 日志级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Warning,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// 由命令行开关决定级别：`--debug` 降到 DEBUG，`--quiet` 升到 WARNING
    pub fn from_flags(debug: bool, quiet: bool) -> Self {
        if debug {
            Self::Debug
        } else if quiet {
            Self::Warning
        } else {
            Self::Info
        }
    }

    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Warning => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub level: LogLevel,
    pub timestamp_format: String,
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl LogContext {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// 安装到标准错误输出
    pub fn install(&self) -> DefaultGuard {
        self.install_with_writer(std::io::stderr)
    }

    /// 安装到任意输出，作为当前线程的默认订阅者
    pub fn install_with_writer<W>(&self, writer: W) -> DefaultGuard
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(self.level.filter())
            .with_writer(writer)
            .event_format(TemplateFormat::new(&self.timestamp_format))
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

/// `<时间戳> <级别:8> <消息>` 行格式
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    timestamp_format: String,
}

impl TemplateFormat {
    pub fn new(timestamp_format: &str) -> Self {
        Self {
            timestamp_format: timestamp_format.to_string(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} {:<8} ",
            now.format(&self.timestamp_format),
            level_name(*event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}
