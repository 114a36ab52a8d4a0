//! # Configuration Module / 配置模块
//!
//! Optional run settings loaded from a TOML file, overridden by command-line
//! flags.
//!
//! 从 TOML 文件加载的可选运行设置，可被命令行参数覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::planner::Selection;
use crate::core::runner::RunOptions;
use crate::reporting::ReportFormat;

/// The configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "ArcTest.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },
}

/// Run settings. Every field is optional in the file.
/// 运行设置。文件中的每个字段都是可选的。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArcConfig {
    /// The language for output messages (e.g., "en", "zh-CN"). Detected from
    /// the system locale when unset.
    /// 输出消息的语言（例如 "en", "zh-CN"）。未设置时根据系统区域检测。
    pub language: Option<String>,
    /// Report format. / 报告格式。
    pub format: ReportFormat,
    /// Where file-based reports are written.
    /// 文件类报告的输出位置。
    pub output: Option<PathBuf>,
    /// Restricts discovery to classes declared under this directory.
    /// 将发现范围限定在此目录下声明的类。
    pub directory: Option<PathBuf>,
    pub verbose: bool,
    pub fail_fast: bool,
    pub filter: Option<String>,
    pub groups: Vec<String>,
    pub excludes: Vec<String>,
}

/// Values given on the command line. `None`/`false` leaves the file value.
/// 命令行给出的值。`None`/`false` 表示保留文件中的值。
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub language: Option<String>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub directory: Option<PathBuf>,
    pub verbose: bool,
    pub fail_fast: bool,
    pub filter: Option<String>,
    pub groups: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

impl ArcConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] in the working directory is used when present
    /// and defaults otherwise.
    ///
    /// 加载配置。显式给出 `path` 时文件必须存在；否则在工作目录中存在
    /// [`DEFAULT_CONFIG_FILE`] 时使用它，不存在则使用默认值。
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_path_buf(),
            error,
        })?;
        toml::from_str(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Applies command-line values on top of the file values.
    pub fn merge_args(mut self, args: ConfigOverrides) -> Self {
        if args.language.is_some() {
            self.language = args.language;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.output.is_some() {
            self.output = args.output;
        }
        if args.directory.is_some() {
            self.directory = args.directory;
        }
        if args.filter.is_some() {
            self.filter = args.filter;
        }
        if let Some(groups) = args.groups {
            self.groups = groups;
        }
        if let Some(excludes) = args.excludes {
            self.excludes = excludes;
        }
        self.verbose |= args.verbose;
        self.fail_fast |= args.fail_fast;
        self
    }

    pub fn selection(&self) -> Selection {
        Selection::new()
            .with_filter(self.filter.clone().unwrap_or_default())
            .with_groups(self.groups.iter().cloned())
            .with_excludes(self.excludes.iter().cloned())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            selection: self.selection(),
            fail_fast: self.fail_fast,
        }
    }
}
