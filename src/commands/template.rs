//! template 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::template::TemplateRenderer;
use crate::utils::paths;
use std::path::PathBuf;
use tracing::debug;

/// template 命令：渲染模板到输出文件
pub struct TemplateCommand {
    input: PathBuf,
    output: PathBuf,
}

impl TemplateCommand {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

impl CommandHandler for TemplateCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<bool> {
        // 模板按 / 查找，相对路径先相对当前目录展开
        let input = paths::absolutize(&self.input)?;
        debug!(input = %input.display(), vars = ctx.env.len(), "rendering template");

        let renderer = TemplateRenderer::new(ctx.env.clone());
        renderer.fill_and_write(&input, &self.output)?;
        Ok(true)
    }
}
