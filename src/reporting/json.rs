//! # JSON Reporting Module / JSON 报告模块
//!
//! Serializes the summary and every result record as one pretty-printed JSON
//! document.
//!
//! 将摘要和每条结果记录序列化为一个格式化的 JSON 文档。

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::models::{TestRecord, TestResultCollection, TestSummary};
use crate::reporting::{ReportError, ResultPrinter, emit};

/// The top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summary: &'a TestSummary,
    pub tests: Vec<TestRecord>,
}

/// Renders the report as a JSON string.
/// 将报告渲染为 JSON 字符串。
pub fn render(summary: &TestSummary, results: &TestResultCollection) -> Result<String, ReportError> {
    let report = JsonReport {
        summary,
        tests: results.iter().map(|r| r.to_record()).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes the JSON report to a file, or to stdout.
#[derive(Debug, Default)]
pub struct JsonPrinter {
    output: Option<PathBuf>,
}

impl JsonPrinter {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

impl ResultPrinter for JsonPrinter {
    fn print_summary(
        &mut self,
        summary: &TestSummary,
        results: &TestResultCollection,
    ) -> Result<(), ReportError> {
        let json = render(summary, results)?;
        emit(self.output.as_deref(), &json)
    }
}
