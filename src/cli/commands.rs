use super::*;
use crate::core::config::display_value;
use crate::core::{
    read_app_env, read_shell, Config, DotenvStatus, EnvLookup, LogContext, Outcome, ProcessEnv,
};
use clap::CommandFactory;
use tracing::{debug, error, info};

/// 完整运行一次模板
///
/// 先检查互斥开关，再安装日志并报告 `.env` 加载结果，最后执行主流程。
pub fn run(cli: &Cli, dotenv: &DotenvStatus) -> Outcome {
    if cli.has_conflicting_levels() {
        println!("{}", Cli::command().render_usage());
        return Outcome::ConflictingFlags;
    }

    let settings = Settings::from(cli);
    let _log = LogContext::new(settings.log_level).install();
    dotenv.report();

    let outcome = execute(&settings, &ProcessEnv);
    if outcome == Outcome::Completed {
        println!();
    }
    if !outcome.is_success() {
        debug!("Exiting with status {}", outcome.code());
    }
    outcome
}

/// 主流程：加载配置 → 读取环境 → 回写配置
///
/// 日志由调用方安装；环境变量通过 `env` 读取。
pub fn execute(settings: &Settings, env: &dyn EnvLookup) -> Outcome {
    info!("{} v.{}", crate::APP_NAME, crate::VERSION);

    if settings.version_only {
        return Outcome::VersionReported;
    }

    if settings.log_level == LogLevel::Debug {
        debug!("****** Debug mode enabled ******");
    }

    let path = &settings.config_path;
    let config = match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            error!(
                "ERROR: There was a problem loading the config file [{}]",
                e.path().display()
            );
            error!("{}", e);
            return Outcome::ConfigLoadFailed;
        }
    };
    if config.is_empty() {
        debug!("{} has no keys", path.display());
    } else {
        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        debug!("Loaded {} keys from {}: {}", config.len(), path.display(), keys.join(", "));
    }

    info!("Starting...");
    info!("Test: {}", display_value(config.test_value()));

    let shell = match read_shell(env) {
        Ok(shell) => shell,
        Err(e) => {
            error!("ERROR: There was a problem reading the environment");
            error!("{}", e);
            return Outcome::EnvironmentGuardExit;
        }
    };
    info!("Shell: {}", shell);
    info!("ENV: {}", read_app_env(env).as_deref().unwrap_or("None"));

    if settings.guard == GuardPolicy::AlwaysExit {
        debug!("Legacy guard: exiting after a successful environment read");
        return Outcome::EnvironmentGuardExit;
    }

    debug!("Debug output...");
    info!("Nearly done...");

    if settings.persist {
        if let Err(e) = config.save(path) {
            error!("ERROR: There was a problem saving the config file [{}]", e.path().display());
            error!("{}", e);
            return Outcome::ConfigSaveFailed;
        }
        debug!("Wrote {}", path.display());
    } else {
        info!("Dry run, not writing {}", path.display());
    }

    info!("Done.");
    Outcome::Completed
}
