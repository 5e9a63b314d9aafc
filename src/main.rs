//! `parbench`: charts and summary tables from parallel-loop benchmark results

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use parbench_rs::config::{ImageFormat, RunConfig};
use parbench_rs::pipeline::Pipeline;

/// Image format of the generated charts
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Svg => ImageFormat::Svg,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "parbench")]
#[command(version, about = "Charts and summary tables for OpenMP benchmark results")]
struct Cli {
    /// Directory holding task-a.csv and task-b.csv
    #[arg(long, default_value = "results")]
    input_dir: PathBuf,

    /// Directory receiving the charts and summary_tables.md
    #[arg(long, default_value = "plots")]
    output_dir: PathBuf,

    /// Chart image format
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::default()
        .input_dir(cli.input_dir)
        .output_dir(cli.output_dir)
        .image_format(cli.format.into());

    let summary = Pipeline::default()
        .run(&config)
        .context("report generation aborted")?;

    if !summary.failed.is_empty() {
        log::warn!(
            "{} report(s) failed: {}",
            summary.failed.len(),
            summary
                .failed
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}
