use arctest::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub String);

#[derive(Default)]
pub struct MyFirstTest;

impl TestCase for MyFirstTest {}

impl MyFirstTest {
    fn test_true_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(true, "")
    }

    fn test_null_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_null(Value::Null, "")?;
        assert_not_null("abc", "")
    }

    fn test_equal_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_equals("a", "a", "")?;
        assert_equals(1, "1", "")
    }

    fn test_same_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_same("a", "a", "")?;
        assert_same(1, 1, "")?;
        assert_same(json!([1, 2, 3]), json!([1, 2, 3]), "")?;
        assert_not_same(1, "1", "")
    }

    fn test_empty_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_empty(json!([]), "")?;
        assert_empty("", "")?;
        assert_not_empty(json!([1, 2, 3]), "")?;
        assert_not_empty("abc", "")
    }

    fn test_string_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_string_contains("world", "hello world", "")?;
        assert_string_starts_with("hello", "hello world", "")?;
        assert_string_ends_with("world", "hello world", "")
    }

    fn test_type_assertions(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_is_string("ArcTest", "")?;
        assert_is_int(42, "")?;
        assert_is_float(2.5, "")?;
        assert_is_array(json!([1, 2, 3]), "")?;
        assert_is_object(json!({ "name": "arctest" }), "")?;
        assert_is_bool(true, "")?;
        assert_instance_of::<InvalidArgument>(&InvalidArgument("x".into()), "")
    }

    fn test_exception_assertions(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.expect_error::<InvalidArgument>();
        Err(InvalidArgument("Something went wrong".into()).into())
    }

    fn test_failure(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(false, "")
    }

    fn test_should_not_run(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(true, "")
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<MyFirstTest>("MyFirstTest")
        .located(file!())
        .method("testTrueAssertions", MyFirstTest::test_true_assertions)
        .method("testNullAssertions", MyFirstTest::test_null_assertions)
        .method("testEqualAssertions", MyFirstTest::test_equal_assertions)
        .method("testSameAssertions", MyFirstTest::test_same_assertions)
        .method("testEmptyAssertions", MyFirstTest::test_empty_assertions)
        .method("testStringAssertions", MyFirstTest::test_string_assertions)
        .method("testTypeAssertions", MyFirstTest::test_type_assertions)
        .method("testExceptionAssertions", MyFirstTest::test_exception_assertions)
        .method(
            TestMethod::new("testFailure").group("experimental"),
            MyFirstTest::test_failure,
        )
        .method("testShouldNotRun", MyFirstTest::test_should_not_run)
        .build()
}
