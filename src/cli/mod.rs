//! CLI layer: argument parsing, command dispatch and console presentation

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod report;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
