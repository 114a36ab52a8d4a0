//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! This module contains integration tests for the fatal error paths: a
//! missing or invalid configuration, an unknown test directory and a data
//! provider that was declared but never registered.
//!
//! 此模块包含致命错误路径的集成测试：缺失或无效的配置、
//! 不存在的测试目录以及已声明但未注册的数据提供者。

mod common;

use arctest::core::error::RunError;
use arctest::prelude::*;
use arctest::{RunOptions, Runner};
use assert_cmd::prelude::*;
use common::RecordingListener;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[derive(Default)]
struct ProbeTest;

impl TestCase for ProbeTest {}

fn located_class(name: &str, source: Option<&str>) -> TestClass {
    let builder = TestClass::builder::<ProbeTest>(name)
        .method("testProbe", |_: &mut ProbeTest, _: &mut TestContext<'_>| Ok(()));
    match source {
        Some(source) => builder.located(source).build(),
        None => builder.build(),
    }
}

#[cfg(test)]
mod discovery_error_tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let error = TestSuite::discover(vec![located_class("A", None)], Some(&missing)).unwrap_err();

        assert!(matches!(error, RunError::DirectoryNotFound { .. }));
        assert!(error.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.rs");
        fs::write(&file, "// not a directory").unwrap();

        let result = TestSuite::discover(Vec::new(), Some(&file));

        assert!(matches!(result, Err(RunError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_directory_keeps_matching_and_unlocated_classes() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("suite");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("probe_test.rs"), "// probe").unwrap();
        fs::write(nested.join("notes.txt"), "ignored").unwrap();

        let classes = vec![
            located_class("ProbeTest", Some("suite/probe_test.rs")),
            located_class("OtherTest", Some("suite/other_test.rs")),
            located_class("Unlocated", None),
        ];
        let suite = TestSuite::discover(classes, Some(temp_dir.path())).unwrap();

        let names: Vec<&str> = suite.classes().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["ProbeTest", "Unlocated"]);
    }

    #[test]
    fn test_no_directory_keeps_everything() {
        let classes = vec![
            located_class("ProbeTest", Some("suite/probe_test.rs")),
            located_class("Unlocated", None),
        ];

        let suite = TestSuite::discover(classes, None).unwrap();

        assert_eq!(suite.len(), 2);
    }
}

#[cfg(test)]
mod provider_error_tests {
    use super::*;

    #[derive(Default)]
    struct MissingProviderTest;

    impl TestCase for MissingProviderTest {}

    #[test]
    fn test_unregistered_provider_aborts_before_running() {
        let class = TestClass::builder::<MissingProviderTest>("MissingProviderTest")
            .method("testFirst", |_: &mut MissingProviderTest, _: &mut TestContext<'_>| Ok(()))
            .method(
                TestMethod::new("testData").data_provider("rows"),
                |_: &mut MissingProviderTest, _: &mut TestContext<'_>| Ok(()),
            )
            .build();
        let suite = TestSuite::from_classes(vec![class]);
        let (listener, log) = RecordingListener::new();
        let mut runner = Runner::new(RunOptions::default());
        runner.add_listener(Box::new(listener));

        let error = runner.run(&suite).unwrap_err();

        match error {
            RunError::DataProviderMissing {
                class,
                method,
                provider,
            } => {
                assert_eq!(class, "MissingProviderTest");
                assert_eq!(method, "testData");
                assert_eq!(provider, "rows");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(log.borrow().is_empty());
    }
}

#[cfg(test)]
mod duplicate_class_tests {
    use super::*;

    #[derive(Default)]
    struct CountingSetup;

    impl TestCase for CountingSetup {
        fn before_all(class: &mut ClassContext) -> TestFlow {
            let count = class.get("beforeAll").and_then(Value::as_u64).unwrap_or(0);
            class.set("beforeAll", count + 1);
            Ok(())
        }
    }

    fn dup_class() -> TestClass {
        TestClass::builder::<CountingSetup>("Dup")
            .method("testOnly", |_: &mut CountingSetup, _: &mut TestContext<'_>| Ok(()))
            .build()
    }

    #[test]
    fn test_duplicate_class_names_abort_before_running() {
        let suite = TestSuite::from_classes(vec![dup_class(), dup_class()]);
        let (listener, log) = RecordingListener::new();
        let mut runner = Runner::new(RunOptions::default());
        runner.add_listener(Box::new(listener));

        let error = runner.run(&suite).unwrap_err();

        match error {
            RunError::DuplicateClass { class } => assert_eq!(class, "Dup"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(log.borrow().is_empty());
        assert!(runner.class_context("Dup").is_none());
    }

    #[test]
    fn test_distinct_class_names_get_their_own_context() {
        let first = dup_class();
        let second = TestClass::builder::<CountingSetup>("Dup2")
            .method("testOnly", |_: &mut CountingSetup, _: &mut TestContext<'_>| Ok(()))
            .build();
        let suite = TestSuite::from_classes(vec![first, second]);
        let mut runner = Runner::new(RunOptions::default());

        runner.run(&suite).expect("run");

        for name in ["Dup", "Dup2"] {
            let context = runner.class_context(name).expect("context");
            assert_eq!(context.get("beforeAll").and_then(Value::as_u64), Some(1));
        }
    }
}

#[cfg(test)]
mod cli_error_tests {
    use super::*;

    #[test]
    fn test_missing_config_file() {
        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.args(["--lang", "en", "--config", "definitely-missing.toml"]);

        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Error: Failed to load configuration"))
            .stderr(predicate::str::contains("definitely-missing.toml"));
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("broken.toml");
        fs::write(&config, "fail_fast = \"sometimes\"\n").unwrap();

        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.args(["--lang", "en", "--config"]).arg(&config);

        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_unknown_config_key() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("unknown.toml");
        fs::write(&config, "parallel = 4\n").unwrap();

        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.args(["--lang", "en", "--config"]).arg(&config);

        cmd.assert().code(1).stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_missing_test_directory() {
        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.args(["--lang", "en", "--dir", "no/such/directory"]);

        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Test discovery failed"))
            .stderr(predicate::str::contains("no/such/directory"));
    }

    #[test]
    fn test_unknown_argument() {
        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.arg("--definitely-not-a-flag");

        cmd.assert().code(1).stderr(predicate::str::contains("--definitely-not-a-flag"));
    }

    #[test]
    fn test_config_directory_must_exist_even_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("ArcTest.toml");
        let missing = temp_dir.path().join("gone");
        fs::write(
            &config,
            format!("directory = {:?}\n", missing.display().to_string()),
        )
        .unwrap();

        let mut cmd = Command::cargo_bin("arctest").unwrap();
        cmd.args(["--lang", "en", "--config"]).arg(&config);

        cmd.assert().code(1).stderr(predicate::str::contains("Error:"));
    }
}
