//! # Data Models Module / 数据模型模块
//!
//! This module defines the result data flowing out of a run: the terminal
//! [`TestOutcome`], the immutable [`TestResult`] record, the running
//! [`TestSummary`] counters and the ordered [`TestResultCollection`].
//!
//! 此模块定义了运行产生的结果数据：最终结果 [`TestOutcome`]、不可变的
//! [`TestResult`] 记录、累计计数器 [`TestSummary`] 以及有序的 [`TestResultCollection`]。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::core::signal::AssertionFailed;
use crate::infra::t;

/// Terminal classification of one test attempt.
/// 单次测试尝试的最终分类。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    /// The body completed (or failed exactly as expected).
    /// 测试主体执行完成（或按预期失败）。
    Passed,
    /// An assertion failed, an unexpected error occurred or an expected error was not raised.
    /// 断言失败、发生意外错误或未抛出预期错误。
    Failed,
    /// The test asked to be skipped or one of its dependencies did not pass.
    /// 测试请求跳过，或其某个依赖未通过。
    Skipped,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Passed => "passed",
            TestOutcome::Failed => "failed",
            TestOutcome::Skipped => "skipped",
        }
    }

    /// Gets the localized status label for display.
    /// 获取用于显示的本地化状态标签。
    pub fn label(&self) -> String {
        match self {
            TestOutcome::Passed => t!("report.status_passed").to_string(),
            TestOutcome::Failed => t!("report.status_failed").to_string(),
            TestOutcome::Skipped => t!("report.status_skipped").to_string(),
        }
    }

    /// Gets the appropriate CSS class for the status.
    pub fn css_class(&self) -> &'static str {
        match self {
            TestOutcome::Passed => "status-Passed",
            TestOutcome::Failed => "status-Failed",
            TestOutcome::Skipped => "status-Skipped",
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a test did not pass.
#[derive(Debug, Clone)]
pub enum FailureCause {
    /// An assertion primitive failed.
    Assertion(AssertionFailed),
    /// Any other error, kept whole so its chain can be reported.
    Error(Arc<anyhow::Error>),
}

impl FailureCause {
    pub fn message(&self) -> String {
        match self {
            FailureCause::Assertion(failure) => failure.message.clone(),
            FailureCause::Error(error) => error.to_string(),
        }
    }

    /// The full cause chain (and backtrace, when captured).
    /// 完整的原因链（以及捕获到的回溯）。
    pub fn trace(&self) -> Option<String> {
        match self {
            FailureCause::Assertion(_) => None,
            FailureCause::Error(error) => Some(format!("{error:?}")),
        }
    }
}

/// The immutable record of one test attempt.
///
/// 单次测试尝试的不可变记录。
#[derive(Debug, Clone)]
pub struct TestResult {
    class_name: String,
    method: String,
    outcome: TestOutcome,
    message: String,
    cause: Option<FailureCause>,
    duration: Duration,
}

impl TestResult {
    pub fn new(
        class_name: impl Into<String>,
        method: impl Into<String>,
        outcome: TestOutcome,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method: method.into(),
            outcome,
            message: message.into(),
            cause: None,
            duration: Duration::ZERO,
        }
    }

    pub fn with_cause(mut self, cause: FailureCause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn outcome(&self) -> TestOutcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&FailureCause> {
        self.cause.as_ref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == TestOutcome::Failed
    }

    /// `Class::method`, the identifier printers show.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.class_name, self.method)
    }

    /// The expected/actual pair, present for assertion failures.
    pub fn assertion(&self) -> Option<&AssertionFailed> {
        match &self.cause {
            Some(FailureCause::Assertion(failure)) => Some(failure),
            _ => None,
        }
    }

    /// Flattens the result into the serializable shape reports use.
    /// 将结果展开为报告使用的可序列化结构。
    pub fn to_record(&self) -> TestRecord {
        let mut record = TestRecord {
            class: self.class_name.clone(),
            method: self.method.clone(),
            outcome: self.outcome,
            message: self.message.clone(),
            exception: None,
            trace: None,
            expected: None,
            actual: None,
            duration: self.duration.as_secs_f64(),
        };

        match &self.cause {
            Some(FailureCause::Assertion(failure)) => {
                record.expected = Some(failure.expected.clone());
                record.actual = Some(failure.actual.clone());
                record.message = failure.message.clone();
            }
            Some(cause @ FailureCause::Error(_)) => {
                record.exception = Some(cause.message());
                record.trace = cause.trace();
            }
            None => {}
        }

        record
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.qualified_name(), self.outcome)?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        Ok(())
    }
}

/// The serializable view of a [`TestResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub class: String,
    pub method: String,
    pub outcome: TestOutcome,
    pub message: String,
    pub exception: Option<String>,
    pub trace: Option<String>,
    pub expected: Option<Value>,
    pub actual: Option<Value>,
    /// Seconds.
    pub duration: f64,
}

/// Running counters for a run. Counts only ever increase.
///
/// 一次运行的累计计数器，计数只增不减。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    total: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
    #[serde(with = "duration_secs")]
    duration: Duration,
}

impl TestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one result.
    pub fn apply(&mut self, result: &TestResult) {
        self.total += 1;
        match result.outcome() {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed => self.failed += 1,
            TestOutcome::Skipped => self.skipped += 1,
        }
        self.duration += result.duration();
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Sum of all result durations.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs.max(0.0)).map_err(serde::de::Error::custom)
    }
}

/// Append-only, execution-ordered results of a run.
#[derive(Debug, Clone, Default)]
pub struct TestResultCollection {
    results: Vec<TestResult>,
}

impl TestResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn all(&self) -> &[TestResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestResult> {
        self.results.iter()
    }

    /// Finds the result recorded for `class::method`.
    pub fn find(&self, class_name: &str, method: &str) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|r| r.class_name() == class_name && r.method() == method)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

impl<'a> IntoIterator for &'a TestResultCollection {
    type Item = &'a TestResult;
    type IntoIter = std::slice::Iter<'a, TestResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
