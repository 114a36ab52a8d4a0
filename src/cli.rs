//! # Command Line Interface / 命令行接口
//!
//! Builds the `arctest` command, resolves the UI language before help texts
//! are rendered, and hands the parsed flags to the run command.
//!
//! 构建 `arctest` 命令，在渲染帮助文本之前确定界面语言，并将解析后的参数交给运行命令。

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::case::TestClass;
use crate::core::config::ConfigOverrides;
use crate::core::planner::split_csv;
use crate::core::runner::ExitStatus;
use crate::infra::t;
use crate::reporting::ReportFormat;

pub mod commands;

/// Finds the `--lang <VALUE>` / `--lang=<VALUE>` argument before the full CLI
/// is built, so help texts are already localized.
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let args: Vec<String> = args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Some(lang) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return Some(lang.to_string());
    }
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli() -> Command {
    Command::new("arctest")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .arg(
            Arg::new("filter")
                .long("filter")
                .help(t!("cli.arg_filter").to_string())
                .value_name("SUBSTRING")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("group")
                .long("group")
                .help(t!("cli.arg_group").to_string())
                .value_name("GROUPS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .help(t!("cli.arg_exclude").to_string())
                .value_name("GROUPS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help(t!("cli.arg_format").to_string())
                .value_name("FORMAT")
                .value_parser(ReportFormat::ALL)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(t!("cli.arg_output").to_string())
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help(t!("cli.arg_dir").to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.arg_verbose").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help(t!("cli.arg_fail_fast").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang").to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
}

/// Parsed command-line arguments of a run.
/// 一次运行的已解析命令行参数。
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

impl RunArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let format = matches
            .get_one::<String>("format")
            .map(|format| format.parse::<ReportFormat>())
            .transpose()
            .map_err(anyhow::Error::msg)?;

        let overrides = ConfigOverrides {
            language: matches.get_one::<String>("lang").cloned(),
            format,
            output: matches.get_one::<PathBuf>("output").cloned(),
            directory: matches.get_one::<PathBuf>("dir").cloned(),
            verbose: matches.get_flag("verbose"),
            fail_fast: matches.get_flag("fail-fast"),
            filter: matches.get_one::<String>("filter").cloned(),
            groups: matches.get_one::<String>("group").map(|g| split_csv(g)),
            excludes: matches.get_one::<String>("exclude").map(|e| split_csv(e)),
        };

        Ok(Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            overrides,
        })
    }
}

/// Runs the CLI on the process arguments against the registered classes.
pub fn run(classes: Vec<TestClass>) -> Result<ExitStatus> {
    run_from(std::env::args_os(), classes)
}

/// Runs the CLI on the given arguments (the first one is the program name).
///
/// `--help` and `--version` print and return [`ExitStatus::Success`] without
/// running anything.
///
/// 使用给定参数运行 CLI（第一个参数为程序名）。
/// `--help` 和 `--version` 只打印信息并返回 [`ExitStatus::Success`]，不会运行测试。
pub fn run_from<I, T>(args: I, classes: Vec<TestClass>) -> Result<ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match pre_parse_language(&args) {
        Some(language) => crate::set_language(&language),
        None => crate::init(),
    }

    let matches = match build_cli().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.print()?;
            return Ok(ExitStatus::Success);
        }
        Err(error) => return Err(error.into()),
    };

    let run_args = RunArgs::from_matches(&matches)?;
    commands::run::execute(run_args, classes)
}
