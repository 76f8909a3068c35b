/// 日志输出初始化
///
/// 基于 tracing-subscriber，默认级别 warn，可通过 RUST_LOG 环境变量调整。
/// 诊断信息写入 stderr，保证 stdout 只承载报告输出。

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化全局日志订阅器
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
