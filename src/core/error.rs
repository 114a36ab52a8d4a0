//! # Run Errors / 运行错误
//!
//! Fatal errors that abort a run before (or instead of) reporting. Per-test
//! failures never appear here; they become [`TestResult`](crate::core::models::TestResult)s.
//!
//! 在报告之前（或代替报告）中止运行的致命错误。单个测试的失败不会出现在这里。

use std::path::PathBuf;
use thiserror::Error;

use crate::reporting::ReportError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    /// The discovery directory does not exist.
    #[error("test directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Reading the discovery directory failed.
    #[error("failed to scan test directory {}", path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// A method names a data provider that its class never registered.
    #[error("data provider '{provider}' for {class}::{method} is not registered")]
    DataProviderMissing {
        class: String,
        method: String,
        provider: String,
    },

    /// Two registered classes share a name.
    #[error("test class '{class}' is registered more than once")]
    DuplicateClass { class: String },

    #[error(transparent)]
    Report(#[from] ReportError),
}
