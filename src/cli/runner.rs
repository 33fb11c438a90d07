use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use linegroup::{GroupSize, GroupingParams, RunReport, group_file_to_writer, write_report};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // Stdout carries the grouped output only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_group_size(raw: &str) -> Result<GroupSize, AppError> {
    raw.parse::<GroupSize>().map_err(AppError::from)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let group_size = parse_group_size(&args.group_size)?;
    let params = GroupingParams::new(group_size).with_mode(args.mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = group_file_to_writer(&args.input, &mut out, params).map_err(AppError::from)?;
    out.flush().map_err(AppError::from)?;

    if let Some(report_path) = args.report.as_deref() {
        let report = RunReport::new(&args.input, params, stats);
        write_report(report_path, &report).map_err(AppError::from)?;
    }

    info!("Successfully processed: {:?}", args.input);
    Ok(())
}
