//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DubError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to render {template}: {message}")]
    Render { template: String, message: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // 唯一会中断整个命令的输入错误，由 main 统一退出
    #[error("URL {0} is malformed.")]
    MalformedUrl(String),
}

/// 详细的错误报告函数 (透明原则)
impl DubError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        eprintln!("{}", self);

        if verbose {
            // thiserror 的 #[source] 会保留底层错误
            let mut current = self.source();
            while let Some(next) = current {
                eprintln!("  └─ caused by: {}", next);
                current = next.source();
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, DubError>;
