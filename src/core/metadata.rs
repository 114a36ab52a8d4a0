//! # Metadata Model / 元数据模型
//!
//! Declarative facts attached to a test method at registration time: an
//! optional data provider, the methods it depends on and its group tags.
//! Everything here can be inspected without running the method.
//!
//! 在注册时附加到测试方法的声明性信息：可选的数据提供者、
//! 其依赖的方法以及分组标签。无需运行方法即可检查这些信息。

use serde_json::Value;

/// One parameter set produced by a data provider.
pub type DataSet = Vec<Value>;

/// The naming convention every selectable test method must follow.
pub const TEST_PREFIX: &str = "test";

/// Immutable metadata for one method of a test class.
/// 测试类中单个方法的不可变元数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMethod {
    name: String,
    data_provider: Option<String>,
    depends: Vec<String>,
    groups: Vec<String>,
}

impl TestMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_provider: None,
            depends: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Names the provider supplying parameter sets. At most one per method;
    /// a second call replaces the first.
    pub fn data_provider(mut self, provider: impl Into<String>) -> Self {
        self.data_provider = Some(provider.into());
        self
    }

    /// Declares that this method only runs once `method` has passed.
    /// Repeatable.
    pub fn depends(mut self, method: impl Into<String>) -> Self {
        self.depends.push(method.into());
        self
    }

    /// Declares several dependencies at once.
    pub fn depends_on<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends.extend(methods.into_iter().map(Into::into));
        self
    }

    /// Tags the method with a group. Repeatable.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> Option<&str> {
        self.data_provider.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.depends
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Whether the name follows the test naming convention.
    pub fn is_test(&self) -> bool {
        self.name.starts_with(TEST_PREFIX)
    }

    /// Whether the method carries any of the given group tags.
    /// 方法是否带有给定分组标签中的任意一个。
    pub fn in_any_group(&self, groups: &[String]) -> bool {
        self.groups.iter().any(|g| groups.contains(g))
    }
}

impl From<&str> for TestMethod {
    fn from(name: &str) -> Self {
        TestMethod::new(name)
    }
}

impl From<String> for TestMethod {
    fn from(name: String) -> Self {
        TestMethod::new(name)
    }
}
