//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML test reports.
//! It creates a static, styled page with summary counters and a results
//! table colored by outcome, with failure details under each failed row.
//!
//! 此模块处理 HTML 测试报告的生成。
//! 它创建一个带有汇总计数和按结果着色的结果表格的静态样式页面，
//! 每个失败行下方附有失败详情。

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::{Path, PathBuf};

use crate::core::models::{TestOutcome, TestResult, TestResultCollection, TestSummary};
use crate::infra::{fs, t};
use crate::reporting::{ReportError, ResultPrinter};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Renders the full HTML report.
///
/// 渲染完整的 HTML 报告。
///
/// # Arguments / 参数
/// * `summary` - Final counters of the run / 运行的最终计数
/// * `results` - All results in execution order / 按执行顺序排列的所有结果
pub fn render(summary: &TestSummary, results: &TestResultCollection) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title").to_string()) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header").to_string()) }
                div class="summary-container" {
                    (summary_item(summary.total(), "", &t!("html_report.summary.total")))
                    (summary_item(summary.passed(), "passed-text", &t!("html_report.summary.passed")))
                    (summary_item(summary.failed(), "failed-text", &t!("html_report.summary.failed")))
                    (summary_item(summary.skipped(), "skipped-text", &t!("html_report.summary.skipped")))
                    div class="summary-item" {
                        span class="count" { (format!("{:.3}s", summary.duration().as_secs_f64())) }
                        span class="label" { (t!("html_report.summary.duration").to_string()) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.header.class").to_string()) }
                            th { (t!("html_report.table.header.method").to_string()) }
                            th class="status-col" { (t!("html_report.table.header.status").to_string()) }
                            th class="duration-cell" { (t!("html_report.table.header.duration").to_string()) }
                            th { (t!("html_report.table.header.message").to_string()) }
                        }
                    }
                    tbody {
                        @for result in results {
                            (result_row(result))
                        }
                    }
                }
            }
        }
    }
}

fn summary_item(count: usize, class: &str, label: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) } { (count) }
            span class="label" { (label) }
        }
    }
}

fn result_row(result: &TestResult) -> Markup {
    let outcome = result.outcome();
    html! {
        tr class=(outcome.css_class()) {
            td { (result.class_name()) }
            td { (result.method()) }
            td class="status-col" {
                div class={ "status-cell " (outcome.css_class()) } { (outcome.label()) }
            }
            td class="duration-cell" { (format!("{:.3}s", result.duration().as_secs_f64())) }
            td { (result.message()) }
        }
        @if outcome == TestOutcome::Failed {
            @if let Some(details) = failure_details(result) {
                tr class="details-row" {
                    td colspan="5" {
                        pre class="output-content" { (details) }
                    }
                }
            }
        }
    }
}

fn failure_details(result: &TestResult) -> Option<String> {
    if let Some(failure) = result.assertion() {
        return Some(format!(
            "{}: {}\n{}: {}",
            t!("html_report.expected"),
            failure.expected,
            t!("html_report.actual"),
            failure.actual
        ));
    }
    result.cause().and_then(|cause| cause.trace())
}

/// Writes the HTML report to a file, creating parent directories.
#[derive(Debug)]
pub struct HtmlPrinter {
    output: PathBuf,
}

impl HtmlPrinter {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl ResultPrinter for HtmlPrinter {
    fn print_summary(
        &mut self,
        summary: &TestSummary,
        results: &TestResultCollection,
    ) -> Result<(), ReportError> {
        let page = render(summary, results).into_string();
        fs::write_report(&self.output, page).map_err(|error| ReportError::Write {
            path: self.output.clone(),
            error,
        })?;
        println!(
            "{}",
            t!("html_report.written", path = self.output.display().to_string())
        );
        Ok(())
    }
}
