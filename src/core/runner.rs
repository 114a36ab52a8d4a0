//! # Test Runner / 测试运行器
//!
//! The orchestrator. It walks the suite class by class, selects methods,
//! gates them on their dependencies, runs them under the lifecycle hooks,
//! aggregates the summary and stops early in fail-fast mode. The printer and
//! the listeners see every result in execution order.
//!
//! 编排器。逐个类遍历套件，选择方法，按依赖关系进行门控，在生命周期钩子下运行，
//! 汇总结果并在快速失败模式下提前停止。打印器和监听器按执行顺序接收每个结果。

use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::core::case::{ClassContext, ClassPhase, TestClass};
use crate::core::dependency::DependencyChecker;
use crate::core::discovery::TestSuite;
use crate::core::error::RunError;
use crate::core::execution::Executor;
use crate::core::lifecycle::LifecycleManager;
use crate::core::listener::TestListener;
use crate::core::metadata::TestMethod;
use crate::core::models::{FailureCause, TestOutcome, TestResult, TestResultCollection, TestSummary};
use crate::core::planner::Selection;
use crate::core::signal::Signal;
use crate::reporting::ResultPrinter;

/// Options controlling one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub selection: Selection,
    /// Abort the whole run at the first FAILED result.
    pub fail_fast: bool,
}

/// How a run ended, mapped onto the process exit code.
/// 运行的结束方式，对应进程退出码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No test failed. / 没有测试失败。
    Success,
    /// The run completed with at least one failure. / 运行完成但至少有一个失败。
    Failures,
    /// The run was aborted at the first failure. / 运行在第一次失败时中止。
    FailFast,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failures => 1,
            ExitStatus::FailFast => 2,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: TestSummary,
    pub results: TestResultCollection,
    pub status: ExitStatus,
}

/// Forwards results to the printer and listeners while counting them.
struct Recorder<'r> {
    printer: &'r mut Option<Box<dyn ResultPrinter>>,
    listeners: &'r mut [Box<dyn TestListener>],
    summary: TestSummary,
    results: TestResultCollection,
}

impl Recorder<'_> {
    fn test_started(&mut self, class_name: &str, method: &str) {
        for listener in self.listeners.iter_mut() {
            listener.on_test_start(class_name, method);
        }
    }

    fn record(&mut self, result: TestResult) {
        debug!(
            test = %result.qualified_name(),
            outcome = %result.outcome(),
            "test finished"
        );
        self.summary.apply(&result);
        if let Some(printer) = self.printer.as_mut() {
            printer.print_test_result(&result);
        }
        for listener in self.listeners.iter_mut() {
            listener.on_test_end(&result);
        }
        self.results.add(result);
    }
}

/// Runs a [`TestSuite`] sequentially.
///
/// 顺序运行 [`TestSuite`]。
pub struct Runner {
    options: RunOptions,
    printer: Option<Box<dyn ResultPrinter>>,
    listeners: Vec<Box<dyn TestListener>>,
    contexts: IndexMap<String, ClassContext>,
    executor: Executor,
    lifecycle: LifecycleManager,
}

impl Runner {
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            printer: None,
            listeners: Vec::new(),
            contexts: IndexMap::new(),
            executor: Executor::new(),
            lifecycle: LifecycleManager::new(),
        }
    }

    pub fn with_printer(mut self, printer: Box<dyn ResultPrinter>) -> Self {
        self.printer = Some(printer);
        self
    }

    pub fn add_listener(&mut self, listener: Box<dyn TestListener>) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// The class-scoped state left by the last run.
    pub fn class_context(&self, class_name: &str) -> Option<&ClassContext> {
        self.contexts.get(class_name)
    }

    /// Runs the suite.
    ///
    /// Fails before any test runs when two classes share a name or a method
    /// names an unregistered data provider, and after the run when the
    /// printer cannot write its summary.
    ///
    /// 运行套件。若两个类同名或某方法引用了未注册的数据提供者，则在任何测试运行前失败；
    /// 若打印器无法写出摘要，则在运行后失败。
    pub fn run(&mut self, suite: &TestSuite) -> Result<RunReport, RunError> {
        validate_suite(suite)?;

        self.contexts = suite
            .classes()
            .iter()
            .map(|class| (class.name().to_string(), ClassContext::new(class.name())))
            .collect();

        let Self {
            options,
            printer,
            listeners,
            contexts,
            executor,
            lifecycle,
        } = self;

        if let Some(printer) = printer.as_mut() {
            printer.start();
        }
        for listener in listeners.iter_mut() {
            listener.on_suite_start(suite);
        }

        let mut recorder = Recorder {
            printer,
            listeners,
            summary: TestSummary::new(),
            results: TestResultCollection::new(),
        };
        let mut aborted = false;

        for class in suite.classes() {
            let Some(context) = contexts.get_mut(class.name()) else {
                continue;
            };

            let methods = options.selection.filter(class);
            if methods.is_empty() {
                debug!(class = class.name(), "no selected methods, skipping class");
                context.set_phase(ClassPhase::Done);
                continue;
            }

            aborted = lifecycle.class_scope(class.driver(), context, |context, setup| {
                run_class(class, &methods, context, setup, executor, options.fail_fast, &mut recorder)
            });

            if aborted {
                debug!(class = class.name(), "fail-fast triggered, aborting run");
                break;
            }
        }

        let Recorder {
            printer,
            listeners,
            summary,
            results,
        } = recorder;

        if let Some(printer) = printer.as_mut() {
            printer.print_summary(&summary, &results)?;
        }
        for listener in listeners.iter_mut() {
            listener.on_suite_end(&summary);
        }

        let status = if aborted {
            ExitStatus::FailFast
        } else if summary.has_failures() {
            ExitStatus::Failures
        } else {
            ExitStatus::Success
        };

        Ok(RunReport {
            summary,
            results,
            status,
        })
    }
}

/// Runs the selected methods of one class. Returns `true` when fail-fast
/// stopped the run.
fn run_class(
    class: &TestClass,
    methods: &[&TestMethod],
    context: &mut ClassContext,
    setup: Result<(), Signal>,
    executor: &Executor,
    fail_fast: bool,
    recorder: &mut Recorder<'_>,
) -> bool {
    let driver = class.driver();
    let mut checker = DependencyChecker::new();

    let setup_failure = setup.err().map(SetupFailure::from);

    for method in methods {
        recorder.test_started(class.name(), method.name());

        let result = if let Some(failure) = &setup_failure {
            failure.result(class.name(), method.name())
        } else if let Some(skipped) = checker.skip(class.name(), method) {
            skipped
        } else {
            let mut instance = driver.instantiate();
            let result = executor.run(instance.as_mut(), class.name(), method, context);
            if result.outcome() == TestOutcome::Passed {
                checker.record(method.name());
            }
            result
        };

        let failed = result.is_failure();
        recorder.record(result);

        if fail_fast && failed {
            return true;
        }
    }

    false
}

/// What `before_all` left behind when it did not return normally.
/// A skip request skips every selected method; anything else fails them.
struct SetupFailure {
    outcome: TestOutcome,
    message: String,
    cause: Option<FailureCause>,
}

impl From<Signal> for SetupFailure {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Skip(message) => Self {
                outcome: TestOutcome::Skipped,
                message,
                cause: None,
            },
            Signal::Assertion(failure) => Self {
                outcome: TestOutcome::Failed,
                message: format!("beforeAll failed: {}", failure.message),
                cause: Some(FailureCause::Assertion(failure)),
            },
            Signal::Error(error) => Self {
                outcome: TestOutcome::Failed,
                message: format!("beforeAll failed: {error}"),
                cause: Some(FailureCause::Error(Arc::new(error))),
            },
        }
    }
}

impl SetupFailure {
    fn result(&self, class_name: &str, method: &str) -> TestResult {
        let result = TestResult::new(class_name, method, self.outcome, self.message.clone());
        match &self.cause {
            Some(cause) => result.with_cause(cause.clone()),
            None => result,
        }
    }
}

/// Class names are unique and every declared data provider is registered
/// on its class.
fn validate_suite(suite: &TestSuite) -> Result<(), RunError> {
    let mut names = HashSet::new();
    for class in suite.classes() {
        if !names.insert(class.name()) {
            return Err(RunError::DuplicateClass {
                class: class.name().to_string(),
            });
        }
    }

    for class in suite.classes() {
        for method in class.methods() {
            if let Some(provider) = method.provider() {
                if !class.has_provider(provider) {
                    return Err(RunError::DataProviderMissing {
                        class: class.name().to_string(),
                        method: method.name().to_string(),
                        provider: provider.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
