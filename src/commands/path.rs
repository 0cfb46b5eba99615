//! path 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::types::PathMode;
use crate::utils::paths;
use std::path::PathBuf;
use tracing::debug;

/// path 命令：检查单项权限
pub struct PathCommand {
    path: PathBuf,
    mode: PathMode,
}

impl PathCommand {
    pub fn new(path: PathBuf, mode: PathMode) -> Self {
        Self { path, mode }
    }
}

impl CommandHandler for PathCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<bool> {
        let ok = paths::check_path_for_permissions(&self.path, self.mode);
        debug!(path = %self.path.display(), mode = %self.mode, ok, "path check");
        Ok(ok)
    }
}
