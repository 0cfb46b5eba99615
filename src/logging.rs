//! 结构化日志
//!
//! 诊断信息（`X is required.` 之类）始终直接写 stderr；
//! 这里的 tracing 输出只用于排查，`--verbose` 时打开 debug 级别。

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// 初始化日志，输出到 stderr
pub fn init(verbose: bool) {
    let filter = if verbose { "dub=debug" } else { "dub=warn" };

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
