// Shared fixtures for the integration tests
#![allow(dead_code)]

use arctest::core::listener::TestListener;
use arctest::core::runner::RunReport;
use arctest::models::TestResult;
use arctest::prelude::*;
use arctest::{RunOptions, Runner};
use std::cell::RefCell;
use std::rc::Rc;

pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Records every listener callback as a short string.
pub struct RecordingListener {
    pub log: EventLog,
}

impl RecordingListener {
    pub fn new() -> (Self, EventLog) {
        let log = EventLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl TestListener for RecordingListener {
    fn on_suite_start(&mut self, suite: &TestSuite) {
        self.log.borrow_mut().push(format!("suite_start:{}", suite.len()));
    }

    fn on_test_start(&mut self, class_name: &str, method: &str) {
        self.log.borrow_mut().push(format!("start:{class_name}::{method}"));
    }

    fn on_test_end(&mut self, result: &TestResult) {
        self.log
            .borrow_mut()
            .push(format!("end:{}:{}", result.qualified_name(), result.outcome()));
    }

    fn on_suite_end(&mut self, summary: &arctest::models::TestSummary) {
        self.log.borrow_mut().push(format!("suite_end:{}", summary.total()));
    }
}

/// Appends `event` to the `events` array of the class context.
pub fn push_event(class: &mut ClassContext, event: impl Into<String>) {
    let mut events = class
        .get("events")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    events.push(Value::String(event.into()));
    class.set("events", events);
}

/// Reads back the `events` array of a class context.
pub fn events(runner: &Runner, class_name: &str) -> Vec<String> {
    runner
        .class_context(class_name)
        .and_then(|ctx| ctx.get("events"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn run_suite(classes: Vec<TestClass>, options: RunOptions) -> (Runner, RunReport) {
    let suite = TestSuite::from_classes(classes);
    let mut runner = Runner::new(options);
    let report = runner.run(&suite).expect("run should not fail");
    (runner, report)
}

pub fn outcome_of(report: &RunReport, class_name: &str, method: &str) -> Option<String> {
    report
        .results
        .find(class_name, method)
        .map(|r| r.outcome().to_string())
}

// --- DependsTest ---

#[derive(Default)]
pub struct DependsTest;

impl TestCase for DependsTest {}

pub fn depends_class() -> TestClass {
    TestClass::builder::<DependsTest>("DependsTest")
        .method("testInit", |_: &mut DependsTest, ctx: &mut TestContext<'_>| {
            ctx.class_mut().set("init", true);
            assert_true(true, "")
        })
        .method(
            TestMethod::new("testShouldRun").depends("testInit"),
            |_: &mut DependsTest, ctx: &mut TestContext<'_>| {
                assert_true(ctx.class().flag("init"), "Expected init to have run")
            },
        )
        .method(
            TestMethod::new("testShouldSkip").depends("testFails"),
            |_: &mut DependsTest, _: &mut TestContext<'_>| fail("This test should have been skipped"),
        )
        .method(
            TestMethod::new("testFails").group("experimental"),
            |_: &mut DependsTest, _: &mut TestContext<'_>| {
                assert_true(false, "Intentional failure to test dependency skip")
            },
        )
        .method(
            TestMethod::new("testSkipped").depends("testNeverRun"),
            |_: &mut DependsTest, _: &mut TestContext<'_>| fail("testNeverRun does not exist"),
        )
        .build()
}

// --- LifecycleProbe ---

/// Logs every hook and body call into the class context.
#[derive(Default)]
pub struct LifecycleProbe {
    prepared: bool,
}

impl TestCase for LifecycleProbe {
    fn before_all(class: &mut ClassContext) -> TestFlow {
        push_event(class, "before_all");
        Ok(())
    }

    fn after_all(class: &mut ClassContext) -> TestFlow {
        push_event(class, "after_all");
        Ok(())
    }

    fn before_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        self.prepared = true;
        let event = format!("before_each:{}", ctx.method());
        push_event(ctx.class_mut(), event);
        Ok(())
    }

    fn after_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        let event = format!("after_each:{}", ctx.method());
        push_event(ctx.class_mut(), event);
        Ok(())
    }
}

pub fn lifecycle_class() -> TestClass {
    TestClass::builder::<LifecycleProbe>("LifecycleProbe")
        .method("testOne", |probe: &mut LifecycleProbe, ctx: &mut TestContext<'_>| {
            push_event(ctx.class_mut(), "body:testOne");
            assert_true(probe.prepared, "before_each did not run on this instance")
        })
        .method("testTwo", |_: &mut LifecycleProbe, ctx: &mut TestContext<'_>| {
            push_event(ctx.class_mut(), "body:testTwo");
            assert_same(1, "1", "")
        })
        .method(
            TestMethod::new("testThree").depends("testTwo"),
            |_: &mut LifecycleProbe, ctx: &mut TestContext<'_>| {
                push_event(ctx.class_mut(), "body:testThree");
                Ok(())
            },
        )
        .method("helperMethod", |_: &mut LifecycleProbe, ctx: &mut TestContext<'_>| {
            push_event(ctx.class_mut(), "body:helperMethod");
            Ok(())
        })
        .build()
}

// --- Fail-fast fixtures ---

#[derive(Default)]
pub struct FailFirstTest;

impl TestCase for FailFirstTest {
    fn after_all(class: &mut ClassContext) -> TestFlow {
        class.set("afterAllRan", true);
        Ok(())
    }
}

pub fn fail_first_class() -> TestClass {
    TestClass::builder::<FailFirstTest>("FailFirstTest")
        .method("testFirst", |_: &mut FailFirstTest, _: &mut TestContext<'_>| {
            assert_equals(1, 2, "first method fails")
        })
        .method("testSecond", |_: &mut FailFirstTest, _: &mut TestContext<'_>| Ok(()))
        .build()
}

#[derive(Default)]
pub struct NeverReachedTest;

impl TestCase for NeverReachedTest {
    fn before_all(class: &mut ClassContext) -> TestFlow {
        class.set("beforeAllRan", true);
        Ok(())
    }
}

pub fn never_reached_class() -> TestClass {
    TestClass::builder::<NeverReachedTest>("NeverReachedTest")
        .method("testAnything", |_: &mut NeverReachedTest, _: &mut TestContext<'_>| Ok(()))
        .build()
}
