//! # Signals / 信号
//!
//! Test bodies and hooks report how they ended through [`TestFlow`]. The error
//! side is a [`Signal`]: a skip request, a failed assertion or any other error.
//! The executor turns each signal into a terminal outcome.
//!
//! 测试主体和钩子通过 [`TestFlow`] 报告结束方式。错误一侧是 [`Signal`]：
//! 跳过请求、断言失败或其他任何错误。执行器将每个信号转换为最终结果。

use serde_json::Value;
use std::fmt;

/// The return type of every test body and hook.
pub type TestFlow = Result<(), Signal>;

/// How a test body left the happy path.
/// 测试主体如何偏离正常路径。
#[derive(Debug)]
pub enum Signal {
    /// The test asked to be skipped. / 测试请求跳过。
    Skip(String),
    /// An assertion did not hold. / 断言未成立。
    Assertion(AssertionFailed),
    /// Any other failure, matched against the declared expected error.
    /// 任何其他失败，将与声明的预期错误进行匹配。
    Error(anyhow::Error),
}

impl Signal {
    pub fn skip(message: impl Into<String>) -> Self {
        Signal::Skip(message.into())
    }

    /// Wraps an `anyhow::Error` (which has no `std::error::Error` impl, so `?`
    /// cannot convert it on its own).
    pub fn error(error: anyhow::Error) -> Self {
        Signal::Error(error)
    }
}

impl<E> From<E> for Signal
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Signal::Error(anyhow::Error::new(error))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Skip(message) => write!(f, "skipped: {message}"),
            Signal::Assertion(failure) => write!(f, "{failure}"),
            Signal::Error(error) => write!(f, "{error}"),
        }
    }
}

/// A failed assertion, carrying what was expected and what was found.
///
/// Must not implement `std::error::Error`, or `?` would turn it into
/// [`Signal::Error`].
///
/// 断言失败，携带期望值和实际值。
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailed {
    pub expected: Value,
    pub actual: Value,
    pub message: String,
}

impl AssertionFailed {
    /// Builds a failure; an empty `message` gets the generic
    /// "Failed asserting that [actual] equals [expected]" text.
    pub fn new(expected: impl Into<Value>, actual: impl Into<Value>, message: &str) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        let message = if message.is_empty() {
            format!("Failed asserting that [{actual}] equals [{expected}]")
        } else {
            message.to_string()
        };
        Self {
            expected,
            actual,
            message,
        }
    }
}

impl fmt::Display for AssertionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Skips the current test with the given message.
/// 以给定消息跳过当前测试。
pub fn skip(message: impl Into<String>) -> TestFlow {
    Err(Signal::skip(message))
}

/// Fails the current test unconditionally.
pub fn fail(message: &str) -> TestFlow {
    let message = if message.is_empty() {
        "Test Failed"
    } else {
        message
    };
    Err(Signal::Assertion(AssertionFailed::new(
        "Failure",
        "Triggered",
        message,
    )))
}
