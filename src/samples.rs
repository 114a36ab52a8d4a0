//! # Bundled Demo Suite / 内置演示套件
//!
//! The test classes the `arctest` binary runs. They exercise every feature of
//! the framework, including a few intentional failures tagged with the
//! `experimental` group (`--exclude experimental` gives a green run).
//!
//! `arctest` 可执行文件运行的测试类，覆盖框架的全部功能，
//! 其中包括若干带有 `experimental` 分组的故意失败用例。

use arctest::TestClass;

mod data_provider;
mod depends;
mod expected_errors;
mod lifecycle;
mod multiple_depends;
mod my_first;

/// Every demo class, in discovery order.
pub fn classes() -> Vec<TestClass> {
    vec![
        my_first::class(),
        depends::class(),
        multiple_depends::class(),
        lifecycle::class(),
        data_provider::class(),
        expected_errors::class(),
    ]
}
