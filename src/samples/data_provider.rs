use arctest::prelude::*;

#[derive(Default)]
pub struct DataProviderTest;

impl TestCase for DataProviderTest {}

impl DataProviderTest {
    fn addition_provider(&self) -> Vec<DataSet> {
        vec![
            vec![json!(1), json!(2), json!(3)],
            vec![json!(0), json!(0), json!(0)],
            vec![json!(-1), json!(1), json!(0)],
        ]
    }

    fn numeric_string_provider(&self) -> Vec<DataSet> {
        vec![
            vec![json!("1"), json!(1)],
            vec![json!("2.5"), json!(2.5)],
            vec![json!(" 3"), json!(3)],
        ]
    }

    fn empty_provider(&self) -> Vec<DataSet> {
        Vec::new()
    }

    fn test_addition(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        let operand = |i: usize| ctx.param(i).and_then(Value::as_i64).unwrap_or_default();
        assert_equals(operand(2), operand(0) + operand(1), "")
    }

    fn test_numeric_strings(&mut self, ctx: &mut TestContext<'_>) -> TestFlow {
        let (text, number) = (ctx.param(0).cloned(), ctx.param(1).cloned());
        assert_equals(number.clone(), text.clone(), "")?;
        assert_not_same(number, text, "")
    }

    fn test_nothing_to_do(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
        fail("An empty data provider must not call the body")
    }
}

pub fn class() -> TestClass {
    TestClass::builder::<DataProviderTest>("DataProviderTest")
        .located(file!())
        .provider("additionProvider", DataProviderTest::addition_provider)
        .provider("numericStringProvider", DataProviderTest::numeric_string_provider)
        .provider("emptyProvider", DataProviderTest::empty_provider)
        .method(
            TestMethod::new("testAddition").data_provider("additionProvider"),
            DataProviderTest::test_addition,
        )
        .method(
            TestMethod::new("testNumericStrings").data_provider("numericStringProvider"),
            DataProviderTest::test_numeric_strings,
        )
        .method(
            TestMethod::new("testNothingToDo").data_provider("emptyProvider"),
            DataProviderTest::test_nothing_to_do,
        )
        .build()
}
