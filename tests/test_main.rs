//! CLI 参数解析测试

use bootstrap_template::cli::{Cli, GuardPolicy, Settings};
use bootstrap_template::core::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_parse_no_flags() {
    let args = vec!["template"];
    let cli = Cli::try_parse_from(&args).unwrap();
    assert!(!cli.version);
    assert!(!cli.debug);
    assert!(!cli.quiet);
    assert_eq!(cli.config, PathBuf::from("config.json"));

    let settings = Settings::from(&cli);
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_cli_parse_version() {
    for flag in ["-v", "--version"] {
        let cli = Cli::try_parse_from(["template", flag]).unwrap();
        assert!(cli.version);
        assert!(Settings::from(&cli).version_only);
    }
}

#[test]
fn test_cli_parse_debug() {
    let cli = Cli::try_parse_from(["template", "-d"]).unwrap();
    assert!(cli.debug);
    assert_eq!(Settings::from(&cli).log_level, LogLevel::Debug);
}

#[test]
fn test_cli_parse_quiet() {
    let cli = Cli::try_parse_from(["template", "--quiet"]).unwrap();
    assert!(cli.quiet);
    assert_eq!(Settings::from(&cli).log_level, LogLevel::Warning);
}

#[test]
fn test_cli_debug_and_quiet_parse_but_conflict() {
    let cli = Cli::try_parse_from(["template", "-d", "-q"]).unwrap();
    assert!(cli.has_conflicting_levels());

    let cli = Cli::try_parse_from(["template", "-d"]).unwrap();
    assert!(!cli.has_conflicting_levels());
}

#[test]
fn test_cli_parse_config_path() {
    let cli = Cli::try_parse_from(["template", "-c", "other/settings.json"]).unwrap();
    assert_eq!(
        Settings::from(&cli).config_path,
        PathBuf::from("other/settings.json")
    );
}

#[test]
fn test_cli_parse_dry_run_and_legacy_guard() {
    let cli = Cli::try_parse_from(["template", "--dry-run", "--legacy-guard"]).unwrap();
    let settings = Settings::from(&cli);
    assert!(!settings.persist);
    assert_eq!(settings.guard, GuardPolicy::AlwaysExit);
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["template", "--frobnicate"]).is_err());
}

#[test]
fn test_cli_help() {
    let err = Cli::try_parse_from(["template", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
