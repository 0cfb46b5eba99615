//! wait 命令处理器

use super::{CommandContext, CommandHandler};
use crate::error::Result;
use crate::readiness;
use std::time::Duration;

/// wait 命令：等待 TCP 服务可连
pub struct WaitCommand {
    host: String,
    port: u16,
    timeout: Duration,
}

impl WaitCommand {
    pub fn new(host: String, port: u16, timeout: Duration) -> Self {
        Self {
            host,
            port,
            timeout,
        }
    }
}

impl CommandHandler for WaitCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<bool> {
        Ok(readiness::wait_for_service(
            &self.host,
            self.port,
            self.timeout,
        ))
    }
}
