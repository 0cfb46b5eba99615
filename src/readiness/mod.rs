//! 服务就绪检查
//!
//! 同步阻塞，无取消机制；调用方需要提前结束时只能终止进程。

pub mod http;
pub mod tcp;

pub use http::{Target, check_http_ready};
pub use tcp::{RETRY_INTERVAL, wait_for_service};
