//! # Run Command Module / 运行命令模块
//!
//! This module implements the run command of the ArcTest CLI, which loads
//! the configuration, discovers the suite and runs it with the selected
//! report format.
//!
//! 此模块实现了 ArcTest CLI 的运行命令，
//! 它加载配置、发现测试套件并使用所选报告格式运行。

use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

use crate::{
    cli::RunArgs,
    core::{
        case::TestClass,
        config::ArcConfig,
        discovery::TestSuite,
        listener::LoggerListener,
        runner::{ExitStatus, Runner},
    },
    infra::{logging, t},
    reporting::{ReportFormat, create_printer},
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `classes` - Every registered test class
///
/// # Returns
/// The exit status of the run, or an error for fatal conditions
/// (configuration, discovery, data providers, report writing)
pub fn execute(args: RunArgs, classes: Vec<TestClass>) -> Result<ExitStatus> {
    let config = load_config(&args)?;

    if let Some(language) = &config.language {
        crate::set_language(language);
    }
    logging::init(config.verbose);
    debug!(?config, "resolved configuration");

    let suite = TestSuite::discover(classes, config.directory.as_deref())
        .with_context(|| t!("run.discovery_failed").to_string())?;

    if suite.is_empty() && config.format == ReportFormat::Console {
        println!("{}", t!("run.no_classes").yellow());
    }

    let printer = create_printer(config.format, config.output.as_deref(), config.verbose);
    let mut runner = Runner::new(config.run_options()).with_printer(printer);
    if config.verbose {
        runner.add_listener(Box::new(LoggerListener::new()));
    }

    let report = runner.run(&suite)?;

    if report.status == ExitStatus::FailFast && config.format == ReportFormat::Console {
        println!("\n{}", t!("run.fail_fast_abort").red().bold());
    }

    Ok(report.status)
}

/// Loads the configuration file and applies the command-line overrides.
fn load_config(args: &RunArgs) -> Result<ArcConfig> {
    let config = ArcConfig::load(args.config.as_deref()).with_context(|| {
        t!("run.config_load_failed").to_string()
    })?;
    Ok(config.merge_args(args.overrides.clone()))
}
