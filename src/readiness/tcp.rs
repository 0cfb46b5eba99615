//! TCP 就绪轮询

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// 两次连接尝试之间的固定间隔
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// 单次连接超时的下限
const MIN_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(100);

/// 等待 `host:port` 开始监听
///
/// 只按墙钟时间限制，不限尝试次数：每次失败后睡眠 [`RETRY_INTERVAL`]，
/// 醒来时若已超过 `timeout` 则放弃。超时只在两次尝试之间检查，
/// 因此最终耗时可能比 `timeout` 多出最多一个重试间隔。
pub fn wait_for_service(host: &str, port: u16, timeout: Duration) -> bool {
    let start = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let attempt_timeout = attempt_timeout(timeout, start.elapsed());

        match try_connect(host, port, attempt_timeout) {
            Ok(()) => {
                debug!(host, port, attempt, elapsed = ?start.elapsed(), "service is reachable");
                return true;
            }
            Err(err) => {
                debug!(host, port, attempt, error = %err, "connection attempt failed");
            }
        }

        thread::sleep(RETRY_INTERVAL);

        if start.elapsed() > timeout {
            debug!(host, port, attempt, "gave up waiting for service");
            return false;
        }
    }
}

/// 单次尝试的连接超时：剩余预算，但不低于 [`MIN_ATTEMPT_TIMEOUT`]
fn attempt_timeout(timeout: Duration, elapsed: Duration) -> Duration {
    timeout.saturating_sub(elapsed).max(MIN_ATTEMPT_TIMEOUT)
}

/// 依次尝试解析出的每个地址，连上后立即关闭
fn try_connect(host: &str, port: u16, timeout: Duration) -> io::Result<()> {
    let mut last_err = None;

    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                drop(stream);
                return Ok(());
            }
            Err(err) => last_err = Some(err),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("{} resolved to no addresses", host),
        )
    }))
}
