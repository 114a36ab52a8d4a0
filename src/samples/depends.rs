use arctest::prelude::*;

#[derive(Default)]
pub struct DependsTest;

impl TestCase for DependsTest {}

impl DependsTest {
    fn test_init(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.class_mut().set("init", true);
        assert_true(true, "")
    }

    fn test_should_run(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(ctx.class().flag("init"), "Expected init to have run")
    }

    fn test_should_skip(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        fail("This test should have been skipped")
    }

    fn test_fails(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(false, "Intentional failure to test dependency skip")
    }

    fn test_skipped(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        fail("Should be skipped because testNeverRun does not run")
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<DependsTest>("DependsTest")
        .located(file!())
        .method("testInit", DependsTest::test_init)
        .method(
            TestMethod::new("testShouldRun").depends("testInit"),
            DependsTest::test_should_run,
        )
        .method(
            TestMethod::new("testShouldSkip").depends("testFails"),
            DependsTest::test_should_skip,
        )
        .method(
            TestMethod::new("testFails").group("experimental"),
            DependsTest::test_fails,
        )
        .method(
            TestMethod::new("testSkipped").depends("testNeverRun"),
            DependsTest::test_skipped,
        )
        .build()
}
