use arctest::prelude::*;

#[derive(Default)]
pub struct LifeCycleHooksTest {
    before_each_ran: bool,
}

impl TestCase for LifeCycleHooksTest {
    fn before_all(class: &mut ClassContext) -> TestFlow {
        class.set("beforeAllRan", true);
        Ok(())
    }

    fn after_all(class: &mut ClassContext) -> TestFlow {
        class.set("afterAllRan", true);
        Ok(())
    }

    fn before_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        self.before_each_ran = true;
        ctx.class_mut().increment("beforeEachCount");
        Ok(())
    }

    fn after_each(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.class_mut().increment("afterEachCount");
        Ok(())
    }
}

impl LifeCycleHooksTest {
    fn test_hooks_on_first_run(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(ctx.class().flag("beforeAllRan"), "beforeAll() was not called")?;
        assert_true(self.before_each_ran, "beforeEach() was not called")
    }

    fn test_hooks_on_second_run(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        assert_true(ctx.class().flag("beforeAllRan"), "beforeAll should still be true")?;
        assert_true(self.before_each_ran, "beforeEach should run again for each test")
    }

    fn test_after_all_effect(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        assert_false(ctx.class().flag("afterAllRan"), "afterAll ran before the last test")
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<LifeCycleHooksTest>("LifeCycleHooksTest")
        .located(file!())
        .method("testHooksOnFirstRun", LifeCycleHooksTest::test_hooks_on_first_run)
        .method("testHooksOnSecondRun", LifeCycleHooksTest::test_hooks_on_second_run)
        .method("testAfterAllEffect", LifeCycleHooksTest::test_after_all_effect)
        .build()
}
