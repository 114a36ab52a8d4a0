use arctest::prelude::*;
use std::io;

use super::my_first::InvalidArgument;

#[derive(Default)]
pub struct ExpectedErrorTest;

impl TestCase for ExpectedErrorTest {}

impl ExpectedErrorTest {
    fn test_expected_io_error(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.expect_error::<io::Error>();
        Err(io::Error::new(io::ErrorKind::NotFound, "fixture.json not found").into())
    }

    fn test_wrapped_error(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.expect_error::<InvalidArgument>();
        let error = anyhow::Error::new(InvalidArgument("port".into())).context("while parsing config");
        Err(Signal::error(error))
    }

    fn test_skip_requested(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        skip("Not implemented yet")
    }

    fn test_missing_expected_error(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        ctx.expect_error::<InvalidArgument>();
        Ok(())
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<ExpectedErrorTest>("ExpectedErrorTest")
        .located(file!())
        .method("testExpectedIoError", ExpectedErrorTest::test_expected_io_error)
        .method("testWrappedError", ExpectedErrorTest::test_wrapped_error)
        .method("testSkipRequested", ExpectedErrorTest::test_skip_requested)
        .method(
            TestMethod::new("testMissingExpectedError").group("experimental"),
            ExpectedErrorTest::test_missing_expected_error,
        )
        .build()
}
