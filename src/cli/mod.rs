//! CLI module for orbitscope.
//!
//! All CLI logic lives here rather than in main.rs so argument parsing,
//! command dispatch and output can be tested. The entry point `run_cli`
//! is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, OrbitArgs};
pub use commands::{log_filter, run, run_cli, DEFAULT_LOG_FILTER};
pub use output::{write_metrics, write_position, write_presets};

#[cfg(test)]
mod tests;
