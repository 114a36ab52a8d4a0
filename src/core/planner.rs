//! # Test Selection Module / 测试选择模块
//!
//! This module decides which methods of a class take part in a run, from the
//! name filter and the group include/exclude lists.
//!
//! 此模块根据名称过滤器和分组包含/排除列表，决定类中哪些方法参与运行。

use crate::core::case::TestClass;
use crate::core::metadata::TestMethod;

/// Selection criteria for a run. Empty fields impose no restriction.
/// 一次运行的选择条件。空字段不施加任何限制。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Case-sensitive substring of the method or class name.
    /// 方法名或类名中需要包含的子串（区分大小写）。
    pub filter: Option<String>,
    /// The method must carry at least one of these groups.
    /// 方法必须至少带有其中一个分组。
    pub groups: Vec<String>,
    /// The method must carry none of these groups. Wins over `groups`.
    /// 方法不得带有其中任何分组，优先于 `groups`。
    pub excludes: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Decides whether `method` of `class_name` runs.
    ///
    /// The checks short-circuit in order: naming convention, name filter,
    /// excluded groups, included groups.
    ///
    /// 决定 `class_name` 的 `method` 是否运行。
    /// 按顺序短路检查：命名约定、名称过滤、排除分组、包含分组。
    pub fn check(&self, class_name: &str, method: &TestMethod) -> bool {
        if !method.is_test() {
            return false;
        }

        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            if !method.name().contains(filter) && !class_name.contains(filter) {
                return false;
            }
        }

        if !self.excludes.is_empty() && method.in_any_group(&self.excludes) {
            return false;
        }

        if !self.groups.is_empty() && !method.in_any_group(&self.groups) {
            return false;
        }

        true
    }

    /// The selected methods of `class`, in declaration order.
    pub fn filter<'c>(&self, class: &'c TestClass) -> Vec<&'c TestMethod> {
        class
            .methods()
            .iter()
            .filter(|method| self.check(class.name(), method))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.groups.is_empty() && self.excludes.is_empty()
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
/// 拆分逗号分隔的列表，去除空白并丢弃空项。
pub fn split_csv(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
