//! orbitscope CLI
//!
//! Orbit metrics, preset catalog and ground-track ticks from the command line.

use clap::Parser;
use orbitscope::cli::{log_filter, run_cli, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    run_cli(Args::parse())
}
