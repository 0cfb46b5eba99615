//! CLI 参数定义

use crate::types::PathMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// dub - 容器启动脚本工具集
#[derive(Parser, Debug)]
#[command(
    name = "dub",
    version,
    about = "Docker utility belt",
    long_about = "Helpers for container entrypoints: render config templates from env vars, \
                  check required env vars, wait for services and check path permissions. \
                  Exits 0 on success and 1 on failure."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Generate a file from a template and env vars
    Template {
        /// Path to template file
        input: PathBuf,
        /// Path of output file
        output: PathBuf,
    },

    /// Check that an env var is set and non-empty
    Ensure {
        /// Name of env var
        name: String,
    },

    /// Check that at least one of the env vars is set and non-empty
    #[command(name = "ensure-atleast-one")]
    EnsureAtleastOne {
        /// Names of env vars
        names: Vec<String>,
    },

    /// Wait for a network service to accept TCP connections
    Wait {
        /// Host
        host: String,
        /// Port
        port: u16,
        /// Timeout in seconds
        #[arg(value_parser = parse_timeout)]
        timeout: Duration,
    },

    /// Wait for an HTTP/HTTPS URL to be retrievable (2xx)
    #[command(name = "http-ready")]
    HttpReady {
        /// URL to retrieve. Expected HTTP status code: 2xx
        url: String,
        /// Time in seconds to wait for the URL to be retrievable
        #[arg(value_parser = parse_timeout)]
        timeout: Duration,
    },

    /// Check a path for permissions or existence
    Path {
        /// Full path
        path: PathBuf,
        /// Permission to check for
        #[arg(value_enum)]
        mode: PathMode,
    },
}

/// 解析秒数（允许小数），拒绝负数、NaN 与无穷大
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout '{}': expected seconds", s))?;

    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("invalid timeout '{}': must be a finite, non-negative number", s))
}
