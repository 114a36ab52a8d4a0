//! # Test Case Contract / 测试用例契约
//!
//! This module defines the [`TestCase`] trait every test type implements, the
//! per-attempt [`TestContext`] and class-scoped [`ClassContext`] handed to hooks
//! and bodies, and the [`TestClass`] registration builder that replaces runtime
//! reflection with an explicit metadata table.
//!
//! 此模块定义了每个测试类型都要实现的 [`TestCase`] trait、传递给钩子和测试主体的
//! 单次尝试上下文 [`TestContext`] 与类级上下文 [`ClassContext`]，以及用显式元数据表
//! 取代运行时反射的 [`TestClass`] 注册构建器。

use indexmap::IndexMap;
use serde_json::Value;
use std::any::type_name;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::metadata::{DataSet, TestMethod};
use crate::core::signal::{Signal, TestFlow};

/// The contract every test type fulfils. All hooks default to no-ops, so a
/// type only overrides the ones it needs.
///
/// A fresh instance is built with `Default` for every test method attempt.
/// State that must survive between methods belongs in the [`ClassContext`].
///
/// 每个测试类型都要履行的契约。所有钩子默认均为空操作。
/// 每次测试方法尝试都会通过 `Default` 构建一个新实例。
pub trait TestCase: Default + 'static {
    /// Runs once before the first selected method of the class.
    fn before_all(_class: &mut ClassContext) -> TestFlow {
        Ok(())
    }

    /// Runs once after the last selected method of the class, on every exit path.
    fn after_all(_class: &mut ClassContext) -> TestFlow {
        Ok(())
    }

    /// Runs before every method body, after the dependency gate passed.
    fn before_each(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        Ok(())
    }

    /// Runs after every method body, whatever the outcome.
    fn after_each(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        Ok(())
    }
}

/// Where a class is in its run.
/// 类在本次运行中所处的阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassPhase {
    #[default]
    Pending,
    Running,
    Done,
}

/// Class-scoped mutable state, owned by the runner and reset on every run.
///
/// 类级可变状态，由运行器持有，每次运行都会重置。
#[derive(Debug, Clone, Default)]
pub struct ClassContext {
    name: String,
    phase: ClassPhase,
    values: IndexMap<String, Value>,
}

impl ClassContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> ClassPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: ClassPhase) {
        self.phase = phase;
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// `true` only when `key` holds the boolean `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(true)))
    }

    /// Adds one to the integer counter at `key` (missing counts as 0) and
    /// returns the new value.
    pub fn increment(&mut self, key: &str) -> i64 {
        let next = self.values.get(key).and_then(Value::as_i64).unwrap_or(0) + 1;
        self.values.insert(key.to_string(), Value::from(next));
        next
    }
}

/// A declared expectation that the body fails with a particular error type.
///
/// 声明主体将以特定错误类型失败的预期。
#[derive(Debug, Clone, Copy)]
pub struct ExpectedError {
    name: &'static str,
    matcher: fn(&anyhow::Error) -> bool,
}

impl ExpectedError {
    pub fn of<E>() -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            name: type_name::<E>(),
            matcher: chain_contains::<E>,
        }
    }

    /// The full type name of the expected error.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `error`, or any error in its source chain, is of the expected type.
    pub fn matches(&self, error: &anyhow::Error) -> bool {
        (self.matcher)(error)
    }
}

fn chain_contains<E>(error: &anyhow::Error) -> bool
where
    E: std::error::Error + Send + Sync + 'static,
{
    error.chain().any(|cause| cause.is::<E>())
}

/// Per-attempt context handed to `before_each`, the body and `after_each`.
///
/// 传递给 `before_each`、测试主体和 `after_each` 的单次尝试上下文。
pub struct TestContext<'a> {
    class: &'a mut ClassContext,
    method: String,
    expected: Option<ExpectedError>,
    params: DataSet,
}

impl<'a> TestContext<'a> {
    pub fn new(class: &'a mut ClassContext, method: impl Into<String>) -> Self {
        Self {
            class,
            method: method.into(),
            expected: None,
            params: Vec::new(),
        }
    }

    /// Declares that the body is expected to fail with `E` (or an error
    /// wrapping `E`).
    pub fn expect_error<E>(&mut self)
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.expected = Some(ExpectedError::of::<E>());
    }

    pub fn expected_error(&self) -> Option<ExpectedError> {
        self.expected
    }

    /// Consumes the expectation; a second call returns `None`.
    pub(crate) fn take_expected(&mut self) -> Option<ExpectedError> {
        self.expected.take()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn class(&self) -> &ClassContext {
        &*self.class
    }

    pub fn class_mut(&mut self) -> &mut ClassContext {
        &mut *self.class
    }

    /// The current data set, empty when the method has no data provider.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&Value> {
        self.params.get(index)
    }

    pub(crate) fn set_params(&mut self, params: DataSet) {
        self.params = params;
    }
}

/// Type-erased class-level operations of a registered test class.
pub trait ClassDriver {
    fn before_all(&self, class: &mut ClassContext) -> TestFlow;
    fn after_all(&self, class: &mut ClassContext) -> TestFlow;
    fn instantiate(&self) -> Box<dyn TestInstance + '_>;
    fn has_provider(&self, provider: &str) -> bool;
}

/// Type-erased operations on one fresh instance of a test class.
pub trait TestInstance {
    fn before_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow;
    fn after_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow;
    fn invoke(&mut self, method: &str, ctx: &mut TestContext<'_>) -> TestFlow;
    /// Runs the named provider, `None` when it is not registered.
    fn provide(&mut self, provider: &str) -> Option<Vec<DataSet>>;
}

type Body<T> = Box<dyn Fn(&mut T, &mut TestContext<'_>) -> TestFlow>;
type Provider<T> = Box<dyn Fn(&T) -> Vec<DataSet>>;

struct Driver<T> {
    bodies: IndexMap<String, Body<T>>,
    providers: IndexMap<String, Provider<T>>,
}

impl<T: TestCase> ClassDriver for Driver<T> {
    fn before_all(&self, class: &mut ClassContext) -> TestFlow {
        T::before_all(class)
    }

    fn after_all(&self, class: &mut ClassContext) -> TestFlow {
        T::after_all(class)
    }

    fn instantiate(&self) -> Box<dyn TestInstance + '_> {
        Box::new(Bound {
            driver: self,
            instance: T::default(),
        })
    }

    fn has_provider(&self, provider: &str) -> bool {
        self.providers.contains_key(provider)
    }
}

struct Bound<'d, T> {
    driver: &'d Driver<T>,
    instance: T,
}

impl<T: TestCase> TestInstance for Bound<'_, T> {
    fn before_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        self.instance.before_each(ctx)
    }

    fn after_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        self.instance.after_each(ctx)
    }

    fn invoke(&mut self, method: &str, ctx: &mut TestContext<'_>) -> TestFlow {
        match self.driver.bodies.get(method) {
            Some(body) => body(&mut self.instance, ctx),
            None => Err(Signal::error(anyhow::anyhow!(
                "Test method '{method}' is not registered"
            ))),
        }
    }

    fn provide(&mut self, provider: &str) -> Option<Vec<DataSet>> {
        self.driver
            .providers
            .get(provider)
            .map(|provide| provide(&self.instance))
    }
}

/// A registered test class: its name, optional source location, the ordered
/// method metadata table and the erased hooks and bodies.
///
/// 已注册的测试类：名称、可选的源文件位置、有序的方法元数据表以及类型擦除后的钩子和主体。
pub struct TestClass {
    name: String,
    source: Option<PathBuf>,
    methods: Vec<TestMethod>,
    driver: Box<dyn ClassDriver>,
}

impl TestClass {
    pub fn builder<T: TestCase>(name: impl Into<String>) -> TestClassBuilder<T> {
        TestClassBuilder {
            name: name.into(),
            source: None,
            methods: Vec::new(),
            driver: Driver {
                bodies: IndexMap::new(),
                providers: IndexMap::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source file the class was declared in, used by directory discovery.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All declared methods, in declaration order.
    pub fn methods(&self) -> &[TestMethod] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&TestMethod> {
        self.methods.iter().find(|m| m.name() == name)
    }

    pub fn has_provider(&self, provider: &str) -> bool {
        self.driver.has_provider(provider)
    }

    pub fn driver(&self) -> &dyn ClassDriver {
        self.driver.as_ref()
    }
}

impl fmt::Debug for TestClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestClass")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`TestClass::builder`].
pub struct TestClassBuilder<T> {
    name: String,
    source: Option<PathBuf>,
    methods: Vec<TestMethod>,
    driver: Driver<T>,
}

impl<T: TestCase> TestClassBuilder<T> {
    /// Records the declaring source file, typically `file!()`.
    pub fn located(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Registers a method with its metadata. Registering the same name twice
    /// replaces the earlier entry but keeps its position.
    pub fn method<F>(mut self, method: impl Into<TestMethod>, body: F) -> Self
    where
        F: Fn(&mut T, &mut TestContext<'_>) -> TestFlow + 'static,
    {
        let method = method.into();
        let name = method.name().to_string();
        match self.methods.iter().position(|m| m.name() == name) {
            Some(pos) => self.methods[pos] = method,
            None => self.methods.push(method),
        }
        self.driver.bodies.insert(name, Box::new(body));
        self
    }

    /// Registers a named data provider.
    pub fn provider<F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        F: Fn(&T) -> Vec<DataSet> + 'static,
    {
        self.driver.providers.insert(name.into(), Box::new(provider));
        self
    }

    pub fn build(self) -> TestClass {
        TestClass {
            name: self.name,
            source: self.source,
            methods: self.methods,
            driver: Box::new(self.driver),
        }
    }
}
