//! # Reporting Module / 报告模块
//!
//! This module handles the display and persistence of run results in multiple
//! formats. Every format is a [`ResultPrinter`]: it is told when the run
//! starts, sees each result in execution order and finally receives the
//! summary with the full result collection.
//!
//! 此模块处理多种格式的运行结果显示和持久化。每种格式都是一个 [`ResultPrinter`]：
//! 它在运行开始时收到通知，按执行顺序接收每个结果，最后接收摘要和完整的结果集合。

pub mod console;
pub mod html;
pub mod json;
pub mod junit;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::core::models::{TestResult, TestResultCollection, TestSummary};

pub use console::ConsolePrinter;
pub use html::HtmlPrinter;
pub use json::JsonPrinter;
pub use junit::JunitPrinter;

/// Where the HTML report goes when no output path is given.
pub const DEFAULT_HTML_OUTPUT: &str = "output/report.html";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("failed to write report to stdout")]
    Stdout(#[source] std::io::Error),

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

/// Consumer of the result stream of a run.
///
/// 运行结果流的消费者。
pub trait ResultPrinter {
    /// Called once before any test runs.
    fn start(&mut self) {}

    /// Called once per result, in execution order.
    fn print_test_result(&mut self, _result: &TestResult) {}

    /// Called once at the end of the run.
    fn print_summary(
        &mut self,
        summary: &TestSummary,
        results: &TestResultCollection,
    ) -> Result<(), ReportError>;
}

/// Supported report formats.
/// 支持的报告格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
    Junit,
    Html,
}

impl ReportFormat {
    pub const ALL: [&'static str; 4] = ["console", "json", "junit", "html"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Console => "console",
            ReportFormat::Json => "json",
            ReportFormat::Junit => "junit",
            ReportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "junit" => Ok(ReportFormat::Junit),
            "html" => Ok(ReportFormat::Html),
            other => Err(format!(
                "unknown report format '{other}', expected one of: {}",
                ReportFormat::ALL.join(", ")
            )),
        }
    }
}

/// Builds the printer for `format`.
///
/// JSON and JUnit go to `output` or stdout; HTML goes to `output` or
/// [`DEFAULT_HTML_OUTPUT`]. The console printer ignores `output`.
///
/// 为 `format` 构建打印器。JSON 和 JUnit 输出到 `output` 或标准输出；
/// HTML 输出到 `output` 或 [`DEFAULT_HTML_OUTPUT`]。
pub fn create_printer(
    format: ReportFormat,
    output: Option<&Path>,
    verbose: bool,
) -> Box<dyn ResultPrinter> {
    match format {
        ReportFormat::Console => Box::new(ConsolePrinter::new(verbose)),
        ReportFormat::Json => Box::new(JsonPrinter::new(output.map(Path::to_path_buf))),
        ReportFormat::Junit => Box::new(JunitPrinter::new(output.map(Path::to_path_buf))),
        ReportFormat::Html => Box::new(HtmlPrinter::new(
            output.map_or_else(|| PathBuf::from(DEFAULT_HTML_OUTPUT), Path::to_path_buf),
        )),
    }
}

/// Writes a rendered report to `path`, or to stdout when there is none.
pub(crate) fn emit(path: Option<&Path>, contents: &str) -> Result<(), ReportError> {
    match path {
        Some(path) => crate::infra::fs::write_report(path, contents).map_err(|error| {
            ReportError::Write {
                path: path.to_path_buf(),
                error,
            }
        }),
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{contents}").map_err(ReportError::Stdout)
        }
    }
}
