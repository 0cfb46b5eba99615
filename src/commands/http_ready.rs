//! http-ready 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::readiness;
use std::time::Duration;

/// http-ready 命令
pub struct HttpReadyCommand {
    url: String,
    timeout: Duration,
}

impl HttpReadyCommand {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

impl CommandHandler for HttpReadyCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<bool> {
        readiness::check_http_ready(&self.url, self.timeout)
    }
}
