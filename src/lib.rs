//! # ArcTest Library / ArcTest 库
//!
//! This library provides the core functionality for the ArcTest tool,
//! a registration-driven test orchestration framework.
//!
//! 此库为 ArcTest 工具提供核心功能，
//! 这是一个基于注册的测试编排框架。
//!
//! ## Modules / 模块
//!
//! - `core` - Test model, selection, dependency gating, lifecycle and the runner
//! - `infra` - Infrastructure services like report file output and i18n
//! - `reporting` - Result printers (console, JSON, JUnit XML, HTML)
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 测试模型、选择、依赖门控、生命周期和运行器
//! - `infra` - 基础设施服务，如报告文件输出和国际化
//! - `reporting` - 结果打印器（控制台、JSON、JUnit XML、HTML）
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```no_run
//! use arctest::prelude::*;
//!
//! #[derive(Default)]
//! struct MathTest;
//!
//! impl TestCase for MathTest {}
//!
//! impl MathTest {
//!     fn test_addition(&mut self, _ctx: &mut TestContext<'_>) -> TestFlow {
//!         assert_equals(2, 1 + 1, "")
//!     }
//! }
//!
//! let class = TestClass::builder::<MathTest>("MathTest")
//!     .method("testAddition", MathTest::test_addition)
//!     .build();
//! let suite = TestSuite::from_classes(vec![class]);
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::assert;
pub use core::case::{TestCase, TestClass, TestContext};
pub use core::discovery::TestSuite;
pub use core::models;
pub use core::runner::{ExitStatus, RunOptions, Runner};
pub use core::signal::{Signal, TestFlow, fail, skip};

/// Everything a test author needs in scope.
pub mod prelude {
    pub use crate::core::assert::*;
    pub use crate::core::case::{ClassContext, TestCase, TestClass, TestContext};
    pub use crate::core::discovery::TestSuite;
    pub use crate::core::metadata::{DataSet, TestMethod};
    pub use crate::core::signal::{Signal, TestFlow, fail, skip};
    pub use serde_json::{Value, json};
}

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    set_language(&locale);
}

/// Sets the UI language, falling back from the full locale to the language
/// code and finally to "en".
///
/// 设置界面语言，依次回退到语言代码和 "en"。
pub fn set_language(locale: &str) {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
