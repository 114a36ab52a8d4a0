//! # Test Discovery / 测试发现
//!
//! Builds the ordered [`TestSuite`] a run iterates over. Classes are
//! registered explicitly; an optional directory narrows the suite to the
//! classes declared in source files under it.
//!
//! 构建运行时遍历的有序 [`TestSuite`]。测试类通过显式注册提供；
//! 可选目录会把套件限定为在该目录下源文件中声明的类。

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::case::TestClass;
use crate::core::error::RunError;
use crate::infra::fs;

/// The classes of a run, in discovery order.
/// 一次运行的测试类，按发现顺序排列。
#[derive(Debug, Default)]
pub struct TestSuite {
    classes: Vec<TestClass>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes(classes: Vec<TestClass>) -> Self {
        Self { classes }
    }

    pub fn add(&mut self, class: TestClass) -> &mut Self {
        self.classes.push(class);
        self
    }

    pub fn classes(&self) -> &[TestClass] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&TestClass> {
        self.classes.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Builds a suite from registered classes, optionally restricted to
    /// `directory`.
    ///
    /// With a directory, it must exist; every `.rs` file under it is
    /// collected and a class is kept when it declares no source or its
    /// source matches one of the collected files. Registration order is kept.
    ///
    /// 从已注册的类构建套件，可选地限定到 `directory`。
    /// 指定目录时该目录必须存在；未声明源文件或源文件匹配扫描结果的类会被保留。
    pub fn discover(classes: Vec<TestClass>, directory: Option<&Path>) -> Result<Self, RunError> {
        let Some(directory) = directory else {
            return Ok(Self::from_classes(classes));
        };

        if !fs::is_directory(directory) {
            return Err(RunError::DirectoryNotFound {
                path: directory.to_path_buf(),
            });
        }

        let files = fs::collect_files(directory, "rs").map_err(|error| RunError::DirectoryScan {
            path: directory.to_path_buf(),
            error,
        })?;
        debug!(
            directory = %directory.display(),
            files = files.len(),
            "scanned test directory"
        );

        let classes = classes
            .into_iter()
            .filter(|class| match class.source() {
                None => true,
                Some(source) => files.iter().any(|file| same_source(file, source)),
            })
            .collect();

        Ok(Self::from_classes(classes))
    }
}

/// Matches a scanned file against a declared source path. Either may be the
/// longer one, since `file!()` paths are crate-relative.
fn same_source(file: &Path, source: &Path) -> bool {
    let file: PathBuf = fs::absolute_path(file);
    file.ends_with(source) || source.ends_with(&file)
}
