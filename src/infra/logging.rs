//! # Logging Module / 日志模块
//!
//! Installs the `tracing` subscriber used for diagnostic output in verbose
//! mode. Diagnostics go to stderr so report output on stdout stays clean.
//!
//! 安装详细模式下用于诊断输出的 `tracing` 订阅器。
//! 诊断信息输出到标准错误，以保持标准输出上的报告内容干净。

use tracing::Level;

/// Installs a stderr `fmt` subscriber. Later calls are no-ops.
///
/// 安装输出到标准错误的 `fmt` 订阅器。重复调用不会产生效果。
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
