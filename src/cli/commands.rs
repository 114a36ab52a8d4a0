//! # Commands / 命令
//!
//! Implementations of the CLI commands.
//!
//! CLI 命令的实现。

pub mod run;
