//! Command-line interface module.
//!
//! Provides the CLI structure and command handlers for the escoffier binary.

mod commands;
mod cuisines;
mod generate;

pub use commands::{Cli, Commands, OutputFormat};
pub use cuisines::handle_cuisines_command;
pub use generate::handle_generate_command;
