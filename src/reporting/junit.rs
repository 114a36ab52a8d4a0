//! # JUnit XML Reporting Module / JUnit XML 报告模块
//!
//! Renders a run as a JUnit XML document, the format CI systems ingest.
//!
//! 将一次运行渲染为 JUnit XML 文档，供 CI 系统读取。

use std::fmt::Write;
use std::path::PathBuf;

use crate::core::models::{FailureCause, TestOutcome, TestResultCollection, TestSummary};
use crate::reporting::{ReportError, ResultPrinter, emit};

/// Name of the single `<testsuite>` element.
pub const SUITE_NAME: &str = "arctest";

/// Renders the JUnit XML document.
///
/// 渲染 JUnit XML 文档。
///
/// # Output Format / 输出格式
/// ```text
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuites>
///   <testsuite name="arctest" tests="2" failures="1" skipped="0" time="0.001">
///     <testcase classname="DependsTest" name="testInit" time="0.000"/>
///     <testcase classname="DependsTest" name="testFails" time="0.000">
///       <failure type="AssertionFailed" message="..."/>
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
pub fn render(summary: &TestSummary, results: &TestResultCollection) -> String {
    let mut xml = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut xml, summary, results);
    xml
}

fn write_document(
    xml: &mut String,
    summary: &TestSummary,
    results: &TestResultCollection,
) -> std::fmt::Result {
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(xml, "<testsuites>")?;
    writeln!(
        xml,
        r#"  <testsuite name="{}" tests="{}" failures="{}" skipped="{}" time="{:.3}">"#,
        SUITE_NAME,
        summary.total(),
        summary.failed(),
        summary.skipped(),
        summary.duration().as_secs_f64()
    )?;

    for result in results {
        let open = format!(
            r#"    <testcase classname="{}" name="{}" time="{:.3}""#,
            escape_xml(result.class_name()),
            escape_xml(result.method()),
            result.duration().as_secs_f64()
        );

        match result.outcome() {
            TestOutcome::Passed => writeln!(xml, "{open}/>")?,
            TestOutcome::Skipped => {
                writeln!(xml, "{open}>")?;
                writeln!(
                    xml,
                    r#"      <skipped message="{}"/>"#,
                    escape_xml(result.message())
                )?;
                writeln!(xml, "    </testcase>")?;
            }
            TestOutcome::Failed => {
                let failure_type = match result.cause() {
                    Some(FailureCause::Assertion(_)) => "AssertionFailed",
                    Some(FailureCause::Error(_)) => "Error",
                    None => "Failure",
                };
                writeln!(xml, "{open}>")?;
                match result.cause().and_then(|cause| cause.trace()) {
                    Some(trace) => {
                        writeln!(
                            xml,
                            r#"      <failure type="{}" message="{}">{}</failure>"#,
                            failure_type,
                            escape_xml(result.message()),
                            escape_xml(&trace)
                        )?;
                    }
                    None => {
                        writeln!(
                            xml,
                            r#"      <failure type="{}" message="{}"/>"#,
                            failure_type,
                            escape_xml(result.message())
                        )?;
                    }
                }
                writeln!(xml, "    </testcase>")?;
            }
        }
    }

    writeln!(xml, "  </testsuite>")?;
    write!(xml, "</testsuites>")
}

/// Escapes the five XML special characters and drops control characters
/// that XML 1.0 cannot carry.
/// 转义五个 XML 特殊字符，并丢弃 XML 1.0 无法承载的控制字符。
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c < '\u{20}' || c == '\u{fffe}' || c == '\u{ffff}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Writes the JUnit report to a file, or to stdout.
#[derive(Debug, Default)]
pub struct JunitPrinter {
    output: Option<PathBuf>,
}

impl JunitPrinter {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl ResultPrinter for JunitPrinter {
    fn print_summary(
        &mut self,
        summary: &TestSummary,
        results: &TestResultCollection,
    ) -> Result<(), ReportError> {
        emit(self.output.as_deref(), &render(summary, results))
    }
}
