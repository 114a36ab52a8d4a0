//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints run progress and the final summary to the console.
//! It provides colorful, formatted output with internationalization support.
//!
//! 此模块在控制台打印运行进度和最终摘要。
//! 它提供彩色格式化输出，支持国际化。

use chrono::Local;
use colored::*;

use crate::core::models::{TestOutcome, TestResult, TestResultCollection, TestSummary};
use crate::infra::t;
use crate::reporting::{ReportError, ResultPrinter};

/// Prints each result as it arrives and a summary block at the end.
///
/// 逐个打印到达的结果，并在最后打印摘要块。
///
/// # Output Format / 输出格式
/// ```text
/// Running tests on 19-10-2026 14:03:11
///
/// PASSED: DependsTest::testInit (0.000s)
/// FAILED: DependsTest::testFails (0.000s)
///   Message: Failed asserting that [true] equals [false]
///   Expected: false
///   Actual:   true
/// SKIPPED: DependsTest::testShouldSkip (0.000s) - Dependency not met: 'testFails' for 'testShouldSkip'
///
/// Test run completed!
///   Total: 3, Passed: 1, Failed: 1, Skipped: 1
///   Time: 0.001s
/// ```
#[derive(Debug, Default)]
pub struct ConsolePrinter {
    verbose: bool,
}

impl ConsolePrinter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn print_failure_details(&self, result: &TestResult) {
        println!("  {}", t!("console.message", message = result.message()));

        if let Some(failure) = result.assertion() {
            println!(
                "  {}",
                t!("console.expected", value = failure.expected.to_string()).dimmed()
            );
            println!(
                "  {}",
                t!("console.actual", value = failure.actual.to_string()).dimmed()
            );
        }

        if self.verbose {
            if let Some(trace) = result.cause().and_then(|cause| cause.trace()) {
                println!("  {}", t!("console.trace_header").yellow());
                for line in trace.lines() {
                    println!("    {}", line.dimmed());
                }
            }
        }
    }
}

impl ResultPrinter for ConsolePrinter {
    fn start(&mut self) {
        let now = Local::now().format("%d-%m-%Y %H:%M:%S").to_string();
        println!("{}\n", t!("console.run_banner", time = now).cyan().bold());
    }

    fn print_test_result(&mut self, result: &TestResult) {
        let name = result.qualified_name();
        let duration = format!("{:.3}", result.duration().as_secs_f64());

        match result.outcome() {
            TestOutcome::Passed => {
                println!("{}", t!("console.passed", name = name, duration = duration).green());
                if self.verbose && !result.message().is_empty() {
                    println!("  {}", result.message().dimmed());
                }
            }
            TestOutcome::Skipped => {
                println!(
                    "{}",
                    t!(
                        "console.skipped",
                        name = name,
                        duration = duration,
                        message = result.message()
                    )
                    .yellow()
                );
            }
            TestOutcome::Failed => {
                println!("{}", t!("console.failed", name = name, duration = duration).red().bold());
                self.print_failure_details(result);
            }
        }
    }

    fn print_summary(
        &mut self,
        summary: &TestSummary,
        _results: &TestResultCollection,
    ) -> Result<(), ReportError> {
        println!("\n{}", t!("console.summary_banner").bold());

        let failed = summary.failed().to_string();
        println!(
            "  {}: {}, {}: {}, {}: {}, {}: {}",
            t!("console.summary_total"),
            summary.total(),
            t!("console.summary_passed"),
            summary.passed().to_string().green(),
            t!("console.summary_failed"),
            if summary.has_failures() {
                failed.red().bold()
            } else {
                failed.normal()
            },
            t!("console.summary_skipped"),
            summary.skipped().to_string().yellow()
        );
        println!(
            "  {}",
            t!(
                "console.summary_time",
                duration = format!("{:.3}", summary.duration().as_secs_f64())
            )
        );
        Ok(())
    }
}
