//! dub - 容器启动脚本工具集 (Docker utility belt)
//!
//! 每个子命令都是一次独立的同步检查或转换：
//!
//! - `template`：用环境变量渲染 Jinja2 模板
//! - `ensure` / `ensure-atleast-one`：校验必需的环境变量
//! - `wait` / `http-ready`：等待依赖服务就绪
//! - `path`：检查路径权限

// CLI 定义
pub mod cli;

// 命令层
pub mod commands;

pub mod error;
pub mod logging;
pub mod readiness;
pub mod template;
pub mod types;
pub mod utils;

// 重新导出常用类型
pub use error::{DubError, Result};
pub use types::{EnvSnapshot, PathMode, PropertyMap};
