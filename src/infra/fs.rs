//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as scanning test directories and writing report files.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如扫描测试目录和写入报告文件。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Recursively collects every file under `dir` with the given extension,
/// sorted so discovery is deterministic.
///
/// 递归收集 `dir` 下所有具有给定扩展名的文件，并排序以保证发现结果确定。
pub fn collect_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == extension) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Writes `contents` to `path`, creating parent directories first.
///
/// # Arguments
/// * `path` - Destination file
/// * `contents` - Bytes to write
pub fn write_report(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

/// Gets the absolute path from a potentially relative path, falling back to
/// the path as given when it cannot be resolved.
pub fn absolute_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
