//! # Core Module / 核心模块
//!
//! This module contains the core functionality of ArcTest: the test model,
//! selection, dependency gating, lifecycle sequencing, execution and the runner.
//!
//! 此模块包含 ArcTest 的核心功能：测试模型、选择、依赖门控、
//! 生命周期排序、执行和运行器。

pub mod assert;
pub mod case;
pub mod config;
pub mod dependency;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod lifecycle;
pub mod listener;
pub mod metadata;
pub mod models;
pub mod planner;
pub mod runner;
pub mod signal;

// Re-exports
pub use config::ArcConfig;
pub use error::RunError;
pub use models::{TestOutcome, TestResult, TestSummary};
pub use runner::Runner;
