//! ensure / ensure-atleast-one 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;

/// ensure 命令：变量必须存在且非空
pub struct EnsureCommand {
    name: String,
}

impl EnsureCommand {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl CommandHandler for EnsureCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<bool> {
        if ctx.env.is_set(&self.name) {
            return Ok(true);
        }

        eprintln!("{} is required.", self.name);
        Ok(false)
    }
}

/// ensure-atleast-one 命令：列表中至少一个变量存在且非空
pub struct EnsureAtLeastOneCommand {
    names: Vec<String>,
}

impl EnsureAtLeastOneCommand {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl CommandHandler for EnsureAtLeastOneCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<bool> {
        if self.names.iter().any(|name| ctx.env.is_set(name)) {
            return Ok(true);
        }

        // 全部缺失时返回失败，退出码与打印的信息保持一致
        eprintln!("one of ({}) is required.", self.names.join(","));
        Ok(false)
    }
}
