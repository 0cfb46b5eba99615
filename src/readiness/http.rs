//! HTTP/HTTPS 就绪检查
//!
//! 先用 TCP 轮询等端口可连，再发一次 GET，只接受 2xx。

use super::tcp;
use crate::error::{DubError, Result};
use std::time::Duration;
use tracing::debug;
use url::{Host, Url};

/// 从 URL 推导出的连接目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    /// 解析 URL；没有主机部分视为格式错误
    ///
    /// 端口优先取 URL 中显式给出的，否则 https 用 443，其它一律 80。
    pub fn from_url(url: &str) -> Result<Self> {
        let malformed = || DubError::MalformedUrl(url.to_string());
        let parsed = Url::parse(url).map_err(|_| malformed())?;

        let host = match parsed.host() {
            Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            // 去掉方括号，供 ToSocketAddrs 使用
            Some(Host::Ipv6(addr)) => addr.to_string(),
            _ => return Err(malformed()),
        };

        let default_port = if parsed.scheme() == "https" { 443 } else { 80 };
        let port = parsed.port().unwrap_or(default_port);

        Ok(Self { host, port })
    }
}

/// 等待 URL 可访问
///
/// URL 格式错误时返回 `Err`，不会发起任何连接；
/// 不可达或状态码非 2xx 时返回 `Ok(false)` 并把原因打印到 stderr。
pub fn check_http_ready(url: &str, timeout: Duration) -> Result<bool> {
    let target = Target::from_url(url)?;

    if !tcp::wait_for_service(&target.host, target.port, timeout) {
        eprintln!("{} cannot be reached on port {}.", target.host, target.port);
        return Ok(false);
    }

    // 单次请求，不重试
    let (status, body) = match ureq::get(url).call() {
        Ok(response) => {
            let status = response.status();
            (status, response.into_string().unwrap_or_default())
        }
        Err(ureq::Error::Status(status, response)) => {
            (status, response.into_string().unwrap_or_default())
        }
        Err(ureq::Error::Transport(transport)) => {
            eprintln!("Request to {} failed: {}", url, transport);
            return Ok(false);
        }
    };

    debug!(url, status, "received response");
    if is_success(status) {
        Ok(true)
    } else {
        eprintln!(
            "Unexpected response for {}, with code: {} and content: {}",
            url, status, body
        );
        Ok(false)
    }
}

fn is_success(status: u16) -> bool {
    status / 100 == 2
}
