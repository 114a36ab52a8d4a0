//! # Test Listeners / 测试监听器
//!
//! Listeners observe a run alongside the result printer. They are notified
//! synchronously and in execution order.
//!
//! 监听器与结果打印器一起观察运行过程，按执行顺序同步接收通知。

use tracing::info;

use crate::core::discovery::TestSuite;
use crate::core::models::{TestResult, TestSummary};

/// Observer of suite and test events. Every method defaults to a no-op.
/// 套件和测试事件的观察者。所有方法默认均为空操作。
pub trait TestListener {
    fn on_suite_start(&mut self, _suite: &TestSuite) {}

    fn on_test_start(&mut self, _class_name: &str, _method: &str) {}

    fn on_test_end(&mut self, _result: &TestResult) {}

    fn on_suite_end(&mut self, _summary: &TestSummary) {}
}

/// Writes suite and test events to the `tracing` log.
/// 将套件和测试事件写入 `tracing` 日志。
#[derive(Debug, Default)]
pub struct LoggerListener;

impl LoggerListener {
    pub fn new() -> Self {
        Self
    }
}

impl TestListener for LoggerListener {
    fn on_suite_start(&mut self, suite: &TestSuite) {
        info!(classes = suite.len(), "Test suite started.");
    }

    fn on_test_start(&mut self, class_name: &str, method: &str) {
        info!("Start test: {class_name}::{method}");
    }

    fn on_test_end(&mut self, result: &TestResult) {
        info!(
            "Finished test: {} - {} ({:.3} s)",
            result.qualified_name(),
            result.outcome().as_str().to_uppercase(),
            result.duration().as_secs_f64()
        );
    }

    fn on_suite_end(&mut self, summary: &TestSummary) {
        info!(
            total = summary.total(),
            passed = summary.passed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "Test suite completed in {:.3}s",
            summary.duration().as_secs_f64()
        );
    }
}
