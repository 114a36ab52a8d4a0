//! # Dependency Checker Unit Tests / 依赖检查器单元测试

use arctest::core::dependency::DependencyChecker;
use arctest::core::metadata::TestMethod;
use arctest::models::TestOutcome;

#[cfg(test)]
mod dependency_checker_tests {
    use super::*;

    #[test]
    fn test_method_without_dependencies_is_never_skipped() {
        let checker = DependencyChecker::new();

        assert!(checker.skip("DependsTest", &TestMethod::new("testInit")).is_none());
    }

    #[test]
    fn test_unmet_dependency_produces_skipped_result() {
        let checker = DependencyChecker::new();
        let method = TestMethod::new("testShouldSkip").depends("testFails");

        let result = checker.skip("DependsTest", &method).expect("should be skipped");

        assert_eq!(result.outcome(), TestOutcome::Skipped);
        assert_eq!(result.class_name(), "DependsTest");
        assert_eq!(result.method(), "testShouldSkip");
        assert_eq!(
            result.message(),
            "Dependency not met: 'testFails' for 'testShouldSkip'"
        );
        assert!(result.duration().is_zero());
    }

    #[test]
    fn test_recorded_dependency_is_met() {
        let mut checker = DependencyChecker::new();
        let method = TestMethod::new("testShouldRun").depends("testInit");

        assert!(checker.skip("DependsTest", &method).is_some());
        checker.record("testInit");
        assert!(checker.skip("DependsTest", &method).is_none());
        assert!(checker.has_passed("testInit"));
    }

    #[test]
    fn test_first_unmet_dependency_is_reported() {
        let mut checker = DependencyChecker::new();
        checker.record("testInitA");
        let method = TestMethod::new("testRun").depends_on(["testInitA", "testInitB", "testInitC"]);

        let result = checker.skip("MultipleDependsTest", &method).expect("should be skipped");

        assert!(result.message().contains("'testInitB'"));
    }

    #[test]
    fn test_all_dependencies_recorded() {
        let mut checker = DependencyChecker::new();
        let method = TestMethod::new("testRun").depends_on(["testInitA", "testInitB"]);

        checker.record("testInitA");
        assert!(checker.skip("MultipleDependsTest", &method).is_some());
        checker.record("testInitB");
        assert!(checker.skip("MultipleDependsTest", &method).is_none());
    }

    #[test]
    fn test_new_checker_starts_empty() {
        let mut first = DependencyChecker::new();
        first.record("testInit");

        let second = DependencyChecker::new();
        assert!(!second.has_passed("testInit"));
    }
}
