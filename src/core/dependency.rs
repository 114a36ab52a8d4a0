//! # Dependency Checker / 依赖检查器
//!
//! Tracks which methods passed during the current class run and gates methods
//! whose declared dependencies have not.
//!
//! 记录当前类运行中已通过的方法，并拦截依赖尚未通过的方法。

use std::collections::HashSet;

use crate::core::metadata::TestMethod;
use crate::core::models::{TestOutcome, TestResult};

/// Passed-method set for one class run. Append-only; build a new one per class.
#[derive(Debug, Default)]
pub struct DependencyChecker {
    passed: HashSet<String>,
}

impl DependencyChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `method` as passed. Call only after a PASSED outcome.
    pub fn record(&mut self, method: &str) {
        self.passed.insert(method.to_string());
    }

    pub fn has_passed(&self, method: &str) -> bool {
        self.passed.contains(method)
    }

    /// Returns a SKIPPED result naming the first unmet dependency, or `None`
    /// when every dependency has passed (or none is declared).
    ///
    /// 返回指明第一个未满足依赖的 SKIPPED 结果；若所有依赖均已通过（或未声明依赖）则返回 `None`。
    pub fn skip(&self, class_name: &str, method: &TestMethod) -> Option<TestResult> {
        let unmet = method
            .dependencies()
            .iter()
            .find(|dep| !self.passed.contains(dep.as_str()))?;

        Some(TestResult::new(
            class_name,
            method.name(),
            TestOutcome::Skipped,
            format!("Dependency not met: '{unmet}' for '{}'", method.name()),
        ))
    }
}
