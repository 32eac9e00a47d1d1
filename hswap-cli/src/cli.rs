//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, SessionCommand, ShowConfigCommand, SwapCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jump between C-family header and source files.
#[derive(Parser)]
#[command(name = env!("HSWAP_BIN_NAME"))]
#[command(version, about = "Jump between header and source files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory (default: ~/.hswap)
    #[arg(long, value_name = "PATH", global = true, env = "HSWAP_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the counterpart of a header or source file
    Swap(SwapCommand),

    /// Answer swap requests read from stdin, one JSON reply per line
    Session(SessionCommand),

    /// Print the merged configuration
    ShowConfig(ShowConfigCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
