//! # Assertion Unit Tests / 断言单元测试
//!
//! Covers loose and strict equality, null and emptiness checks, string,
//! type, key, count and ordering assertions, and the failure payload.
//!
//! 覆盖宽松与严格相等、空值与空集合检查，以及字符串、类型、键、计数和大小比较断言。

use arctest::core::assert::{is_truthy, loose_eq, numeric_value};
use arctest::core::signal::AssertionFailed;
use arctest::prelude::*;

fn failure(flow: TestFlow) -> AssertionFailed {
    match flow {
        Err(Signal::Assertion(failure)) => failure,
        other => panic!("expected an assertion failure, got {other:?}"),
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;

    #[test]
    fn test_equals_is_loose_and_same_is_strict() {
        assert!(assert_equals(1, "1", "").is_ok());

        let failed = failure(assert_same(1, "1", ""));
        assert_eq!(failed.expected, json!(1));
        assert_eq!(failed.actual, json!("1"));
    }

    #[test]
    fn test_default_failure_message() {
        let failed = failure(assert_equals(1, 2, ""));

        assert_eq!(failed.message, "Failed asserting that [2] equals [1]");
    }

    #[test]
    fn test_custom_failure_message_is_kept() {
        let failed = failure(assert_equals("a", "b", "letters differ"));

        assert_eq!(failed.message, "letters differ");
        assert_eq!(failed.expected, json!("a"));
        assert_eq!(failed.actual, json!("b"));
    }

    #[test]
    fn test_loose_equality_rules() {
        assert!(loose_eq(&json!(1), &json!(1.0)));
        assert!(loose_eq(&json!("10"), &json!("1e1")));
        assert!(loose_eq(&json!(null), &json!("")));
        assert!(loose_eq(&json!(null), &json!(0)));
        assert!(loose_eq(&json!(true), &json!("yes")));
        assert!(loose_eq(&json!([1, "2"]), &json!(["1", 2])));
        assert!(!loose_eq(&json!("abc"), &json!(0)));
        assert!(!loose_eq(&json!("abc"), &json!("ABC")));
        assert!(!loose_eq(&json!([1]), &json!([1, 2])));
    }

    #[test]
    fn test_same_distinguishes_int_and_float() {
        assert!(assert_same(1, 1, "").is_ok());
        assert!(assert_same(1, 1.0, "").is_err());
        assert!(assert_not_same(1, "1", "").is_ok());
    }

    #[test]
    fn test_not_equals() {
        assert!(assert_not_equals(1, 2, "").is_ok());

        let failed = failure(assert_not_equals(1, "1", ""));
        assert_eq!(failed.message, "Failed asserting that [\"1\"] is not equal to [1].");
    }
}

#[cfg(test)]
mod boolean_tests {
    use super::*;

    #[test]
    fn test_true_and_false() {
        assert!(assert_true(true, "").is_ok());
        assert!(assert_false(false, "").is_ok());

        let failed = failure(assert_true(false, ""));
        assert_eq!(failed.expected, json!(true));
        assert_eq!(failed.actual, json!(false));
        assert_eq!(failed.message, "Failed asserting that condition is true.");
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("a"), json!([0]), json!({"a": 0})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(numeric_value(" 42 "), Some(42.0));
        assert_eq!(numeric_value("-1.5e2"), Some(-150.0));
        assert_eq!(numeric_value("0x1A"), None);
        assert_eq!(numeric_value(""), None);
    }
}

#[cfg(test)]
mod null_and_empty_tests {
    use super::*;

    #[test]
    fn test_null_checks_the_value_is_null() {
        assert!(assert_null(Value::Null, "").is_ok());
        assert!(assert_null(None::<i32>, "").is_ok());
        assert!(assert_null(0, "").is_err());

        assert!(assert_not_null(0, "").is_ok());
        assert!(assert_not_null(Value::Null, "").is_err());
    }

    #[test]
    fn test_empty_follows_truthiness() {
        assert!(assert_empty("", "").is_ok());
        assert!(assert_empty(json!([]), "").is_ok());
        assert!(assert_empty("0", "").is_ok());
        assert!(assert_empty("x", "").is_err());

        assert!(assert_not_empty(json!([1]), "").is_ok());
        assert!(assert_not_empty(json!({}), "").is_err());
    }
}

#[cfg(test)]
mod string_tests {
    use super::*;

    #[test]
    fn test_string_assertions() {
        assert!(assert_string_contains("World", "Hello World", "").is_ok());
        assert!(assert_string_starts_with("Hello", "Hello World", "").is_ok());
        assert!(assert_string_ends_with("World", "Hello World", "").is_ok());

        let failed = failure(assert_string_contains("Mars", "Hello World", ""));
        assert_eq!(
            failed.message,
            "Failed asserting that string contains [Mars] in [Hello World]."
        );
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_type_assertions() {
        assert!(assert_is_string("hello", "").is_ok());
        assert!(assert_is_int(42, "").is_ok());
        assert!(assert_is_float(2.5, "").is_ok());
        assert!(assert_is_bool(true, "").is_ok());
        assert!(assert_is_array(json!([1, 2]), "").is_ok());
        assert!(assert_is_object(json!({"a": 1}), "").is_ok());

        let failed = failure(assert_is_int(2.5, ""));
        assert_eq!(failed.expected, json!("int"));
        assert_eq!(failed.actual, json!("float"));
    }

    #[test]
    fn test_value_type_of() {
        assert_eq!(ValueType::of(&json!(null)), ValueType::Null);
        assert_eq!(ValueType::of(&json!(1)), ValueType::Int);
        assert_eq!(ValueType::of(&json!(1.5)), ValueType::Float);
    }

    #[test]
    fn test_instance_of() {
        let value: Box<dyn std::any::Any> = Box::new(String::from("x"));

        assert!(assert_instance_of::<String>(value.as_ref(), "").is_ok());
        assert!(assert_instance_of::<i32>(value.as_ref(), "").is_err());
    }
}

#[cfg(test)]
mod collection_tests {
    use super::*;

    #[test]
    fn test_array_has_key() {
        assert!(assert_array_has_key("a", json!({"a": 1}), "").is_ok());
        assert!(assert_array_has_key(1, json!(["x", "y"]), "").is_ok());
        assert!(assert_array_has_key(2, json!(["x", "y"]), "").is_err());
        assert!(assert_array_has_key("b", json!({"a": 1}), "").is_err());
    }

    #[test]
    fn test_count() {
        assert!(assert_count(3, json!([1, 2, 3]), "").is_ok());
        assert!(assert_count(1, json!({"a": 1}), "").is_ok());

        let failed = failure(assert_count(2, json!([1]), ""));
        assert_eq!(failed.expected, json!(2));
        assert_eq!(failed.actual, json!(1));
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_greater_and_less_than() {
        assert!(assert_greater_than(5, 10, "").is_ok());
        assert!(assert_greater_than(5, "10", "").is_ok());
        assert!(assert_less_than(10, 5, "").is_ok());
        assert!(assert_greater_than(10, 5, "").is_err());
        assert!(assert_less_than(5, 5, "").is_err());
    }

    #[test]
    fn test_incomparable_values_fail() {
        assert!(assert_greater_than(json!([1]), json!({"a": 1}), "").is_err());
    }
}

#[cfg(test)]
mod signal_tests {
    use super::*;

    #[test]
    fn test_fail_uses_default_message() {
        let failed = failure(fail(""));

        assert_eq!(failed.message, "Test Failed");
    }

    #[test]
    fn test_skip_produces_skip_signal() {
        match skip("not today") {
            Err(Signal::Skip(message)) => assert_eq!(message, "not today"),
            other => panic!("expected a skip signal, got {other:?}"),
        }
    }

    #[test]
    fn test_question_mark_wraps_std_errors() {
        fn parse(input: &str) -> TestFlow {
            let _: i32 = input.parse()?;
            Ok(())
        }

        assert!(matches!(parse("12"), Ok(())));
        assert!(matches!(parse("x"), Err(Signal::Error(_))));
    }
}
