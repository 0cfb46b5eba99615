//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait。
//! 处理器返回 `Ok(true)` 表示成功，`Ok(false)` 表示检查未通过（已打印原因），
//! `Err` 表示输入或 I/O 错误。

use crate::cli::Commands;
use crate::error::Result;
use crate::types::EnvSnapshot;

pub mod ensure;
pub mod http_ready;
pub mod path;
pub mod template;
pub mod wait;

pub use ensure::{EnsureAtLeastOneCommand, EnsureCommand};
pub use http_ready::HttpReadyCommand;
pub use path::PathCommand;
pub use template::TemplateCommand;
pub use wait::WaitCommand;

/// 命令上下文
#[derive(Debug)]
pub struct CommandContext {
    pub verbose: bool,
    /// 本次调用读取的环境变量快照
    pub env: EnvSnapshot,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<bool>;
}

/// 根据解析结果构造对应的处理器
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Template { input, output } => Box::new(TemplateCommand::new(input, output)),
        Commands::Ensure { name } => Box::new(EnsureCommand::new(name)),
        Commands::EnsureAtleastOne { names } => Box::new(EnsureAtLeastOneCommand::new(names)),
        Commands::Wait {
            host,
            port,
            timeout,
        } => Box::new(WaitCommand::new(host, port, timeout)),
        Commands::HttpReady { url, timeout } => Box::new(HttpReadyCommand::new(url, timeout)),
        Commands::Path { path, mode } => Box::new(PathCommand::new(path, mode)),
    }
}

/// 执行单个命令
pub fn dispatch(command: Commands, ctx: &CommandContext) -> Result<bool> {
    handler_for(command).execute(ctx)
}

#[cfg(test)]
pub(crate) fn test_context(pairs: &[(&str, &str)]) -> CommandContext {
    CommandContext {
        verbose: false,
        env: pairs.iter().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathMode;

    #[test]
    fn test_dispatch_routes_to_handler() {
        let ctx = test_context(&[("FOO", "x")]);

        assert!(dispatch(Commands::Ensure { name: "FOO".to_string() }, &ctx).unwrap());
        assert!(!dispatch(Commands::Ensure { name: "BAR".to_string() }, &ctx).unwrap());
    }

    #[test]
    fn test_dispatch_path_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_context(&[]);

        let exists = Commands::Path {
            path: temp_dir.path().to_path_buf(),
            mode: PathMode::Exists,
        };
        assert!(dispatch(exists, &ctx).unwrap());

        let missing = Commands::Path {
            path: temp_dir.path().join("gone"),
            mode: PathMode::Exists,
        };
        assert!(!dispatch(missing, &ctx).unwrap());
    }
}
