//! Ordermill batch CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::error;

use ordermill_cli::logging::{LogConfig, LogFormat, init_logging};
use ordermill_cli::pipeline::{self, RunOptions};
use ordermill_cli::summary::print_run_summary;
use ordermill_model::RunConfig;

mod cli;

use crate::cli::{Cli, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }
    let exit_code = match run_batch(&cli) {
        Ok(()) => 0,
        Err(err) => {
            error!("pipeline run failed: {:#}", err);
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_batch(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_yaml_file(&cli.config).context("load run configuration")?;
    let options = RunOptions {
        output_root: cli.output_root.clone(),
        dry_run: cli.dry_run,
    };
    let summary = pipeline::run(&config, &options).context("run pipeline")?;
    print_run_summary(&summary);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
