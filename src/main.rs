//! dub 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 安静模式：成功静默，失败时诊断信息写 stderr
//! - 退出码：成功 0，任何失败 1

use clap::{CommandFactory, Parser};
use dub::cli::Cli;
use dub::commands::{self, CommandContext};
use dub::logging;
use dub::types::{Config, EnvSnapshot};

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    let config = init_config(&cli);
    logging::init(config.verbose);

    let Some(command) = cli.command else {
        // 无子命令：打印帮助并以失败退出
        let _ = Cli::command().print_help();
        std::process::exit(1);
    };

    // 环境变量只读取一次
    let ctx = CommandContext {
        verbose: config.verbose,
        env: EnvSnapshot::capture(),
    };

    // 执行命令，统一错误处理
    let success = match commands::dispatch(command, &ctx) {
        Ok(success) => success,
        Err(e) => {
            e.report(config.verbose);
            false
        }
    };

    if !success {
        eprintln!("Command [{}] FAILED !", invoked_command_line());
        std::process::exit(1);
    }
}

/// 初始化配置
fn init_config(cli: &Cli) -> Config {
    Config {
        verbose: cli.verbose,
    }
}

/// 完整的调用命令行，用于失败提示
fn invoked_command_line() -> String {
    std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
