//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for ArcTest,
//! including report file output, logging and i18n support.
//!
//! 此模块为 ArcTest 提供基础设施服务，
//! 包括报告文件输出、日志和国际化支持。

pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
