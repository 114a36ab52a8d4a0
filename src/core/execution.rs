//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs a single test method attempt: instance hooks around the
//! body, one body call per data set, and the conversion of every signal or
//! panic into exactly one terminal [`TestResult`].
//!
//! 此模块执行单个测试方法的一次尝试：在测试主体周围调用实例钩子，
//! 每个数据集调用一次主体，并将每个信号或 panic 转换为唯一的最终 [`TestResult`]。

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use crate::core::case::{ClassContext, ExpectedError, TestContext, TestInstance};
use crate::core::lifecycle::{LifecycleManager, guard, panic_message};
use crate::core::metadata::TestMethod;
use crate::core::models::{FailureCause, TestOutcome, TestResult};
use crate::core::signal::Signal;

/// Outcome of one attempt before it is stamped with names and duration.
#[derive(Debug)]
struct Verdict {
    outcome: TestOutcome,
    message: String,
    cause: Option<FailureCause>,
}

impl Verdict {
    fn passed(message: impl Into<String>) -> Self {
        Self {
            outcome: TestOutcome::Passed,
            message: message.into(),
            cause: None,
        }
    }

    fn failed(message: impl Into<String>, cause: Option<FailureCause>) -> Self {
        Self {
            outcome: TestOutcome::Failed,
            message: message.into(),
            cause,
        }
    }

    fn skipped(message: impl Into<String>) -> Self {
        Self {
            outcome: TestOutcome::Skipped,
            message: message.into(),
            cause: None,
        }
    }

    /// Classifies a signal against the declared expectation, if any.
    fn from_signal(signal: Signal, expected: Option<ExpectedError>) -> Self {
        match signal {
            Signal::Skip(message) => Verdict::skipped(message),
            Signal::Assertion(failure) => {
                let message = failure.message.clone();
                Verdict::failed(message, Some(FailureCause::Assertion(failure)))
            }
            Signal::Error(error) => match expected {
                Some(expected) if expected.matches(&error) => {
                    Verdict::passed(format!("(expected exception {})", expected.name()))
                }
                _ => Verdict::failed(
                    error.to_string(),
                    Some(FailureCause::Error(Arc::new(error))),
                ),
            },
        }
    }

    fn signal_message(signal: &Signal) -> String {
        match signal {
            Signal::Skip(message) => message.clone(),
            Signal::Assertion(failure) => failure.message.clone(),
            Signal::Error(error) => error.to_string(),
        }
    }
}

/// Runs one test method attempt. Never retries.
///
/// 执行一次测试方法尝试，不会重试。
#[derive(Debug, Default, Clone, Copy)]
pub struct Executor {
    lifecycle: LifecycleManager,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `method` on a fresh `instance`.
    ///
    /// `before_each` runs first; if it signals, the body is skipped and that
    /// signal decides the verdict. `after_each` always runs; its failure turns
    /// a PASSED verdict into FAILED and its skip request into SKIPPED.
    ///
    /// 在新的 `instance` 上运行 `method`。`before_each` 先运行；若其发出信号，
    /// 则跳过主体并由该信号决定结果。`after_each` 总会运行，其失败会把 PASSED 变为 FAILED，
    /// 其跳过请求会把 PASSED 变为 SKIPPED。
    pub fn run(
        &self,
        instance: &mut (dyn TestInstance + '_),
        class_name: &str,
        method: &TestMethod,
        class: &mut ClassContext,
    ) -> TestResult {
        let start = Instant::now();
        let mut ctx = TestContext::new(class, method.name());

        let mut verdict = match self.lifecycle.before_each(instance, &mut ctx) {
            Ok(()) => self.run_body(instance, method, &mut ctx),
            Err(signal) => Verdict::from_signal(signal, None),
        };

        if let Err(signal) = self.lifecycle.after_each(instance, &mut ctx) {
            let message = Verdict::signal_message(&signal);
            if verdict.outcome == TestOutcome::Passed {
                verdict = match signal {
                    Signal::Skip(message) => Verdict::skipped(message),
                    Signal::Assertion(failure) => Verdict::failed(
                        format!("afterEach failed: {message}"),
                        Some(FailureCause::Assertion(failure)),
                    ),
                    Signal::Error(error) => Verdict::failed(
                        format!("afterEach failed: {message}"),
                        Some(FailureCause::Error(Arc::new(error))),
                    ),
                };
            } else {
                warn!(
                    class = class_name,
                    method = method.name(),
                    "afterEach failed: {message}"
                );
            }
        }

        let mut result = TestResult::new(class_name, method.name(), verdict.outcome, verdict.message)
            .with_duration(start.elapsed());
        if let Some(cause) = verdict.cause {
            result = result.with_cause(cause);
        }
        result
    }

    /// Calls the body once, or once per data set when a provider is declared.
    /// The first non-passing data set decides the verdict.
    fn run_body(
        &self,
        instance: &mut (dyn TestInstance + '_),
        method: &TestMethod,
        ctx: &mut TestContext<'_>,
    ) -> Verdict {
        let Some(provider) = method.provider() else {
            return self.invoke(instance, method, ctx);
        };

        let data_sets = match panic::catch_unwind(AssertUnwindSafe(|| instance.provide(provider))) {
            Ok(Some(sets)) => sets,
            Ok(None) => {
                return Verdict::failed(
                    format!("Data provider '{provider}' is not registered"),
                    None,
                );
            }
            Err(payload) => {
                let error = anyhow::Error::msg(panic_message(payload.as_ref()))
                    .context(format!("Data provider '{provider}' panicked"));
                return Verdict::failed(error.to_string(), Some(FailureCause::Error(Arc::new(error))));
            }
        };

        if data_sets.is_empty() {
            return Verdict::skipped(format!("Data provider '{provider}' returned no data sets"));
        }

        for (index, data_set) in data_sets.into_iter().enumerate() {
            ctx.set_params(data_set);
            let verdict = self.invoke(instance, method, ctx);
            if verdict.outcome != TestOutcome::Passed {
                return Verdict {
                    message: format!("data set #{index}: {}", verdict.message),
                    ..verdict
                };
            }
        }

        Verdict::passed("Test passed")
    }

    /// One body call. The expected error is consumed here, so each call
    /// starts without one.
    fn invoke(
        &self,
        instance: &mut (dyn TestInstance + '_),
        method: &TestMethod,
        ctx: &mut TestContext<'_>,
    ) -> Verdict {
        let flow = guard(|| instance.invoke(method.name(), ctx));
        let expected = ctx.take_expected();

        match flow {
            Ok(()) => match expected {
                Some(expected) => Verdict::failed(
                    format!("Expected exception {} was not thrown", expected.name()),
                    None,
                ),
                None => Verdict::passed("Test passed"),
            },
            Err(signal) => Verdict::from_signal(signal, expected),
        }
    }
}
