//! linegroup CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the grouping, and exit
//! with a non-zero status on any error. For programmatic use, prefer the
//! library API (`linegroup::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
