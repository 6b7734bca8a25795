use bootstrap_template::cli::{self, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 加载 .env
    let dotenv = bootstrap_template::init();

    // 解析命令行参数
    let cli = Cli::parse();

    // 执行并映射退出码
    cli::commands::run(&cli, &dotenv).into()
}
