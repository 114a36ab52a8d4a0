use arctest::prelude::*;

#[derive(Default)]
pub struct MultipleDependsTest;

impl TestCase for MultipleDependsTest {}

impl MultipleDependsTest {
    fn test_init_a(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.class_mut().set("initA", true);
        assert_true(true, "")
    }

    fn test_init_b(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.class_mut().set("initB", true);
        assert_true(false, "")
    }

    fn test_run_multiple_dependencies(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(ctx.class().flag("initA"), "Expected initA to have run")?;
        assert_true(ctx.class().flag("initB"), "Expected initB to have run")
    }

    fn test_skipped_missing_multiple_dependencies(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        fail("This test should be skipped due to missing dependencies")
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<MultipleDependsTest>("MultipleDependsTest")
        .located(file!())
        .method("testInitA", MultipleDependsTest::test_init_a)
        .method(
            TestMethod::new("testInitB").group("experimental"),
            MultipleDependsTest::test_init_b,
        )
        .method(
            TestMethod::new("testRunMultipleDependencies").depends_on(["testInitA", "testInitB"]),
            MultipleDependsTest::test_run_multiple_dependencies,
        )
        .method(
            TestMethod::new("testSkippedMissingMultipleDependencies")
                .depends_on(["testMissingA", "testMissingB"]),
            MultipleDependsTest::test_skipped_missing_multiple_dependencies,
        )
        .build()
}
