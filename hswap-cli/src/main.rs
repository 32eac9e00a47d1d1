//! Main entry point for the hswap CLI.
//!
//! This is the command-line interface for the hswap counterpart finder.
//! It provides commands for:
//! - `swap`: Print the counterpart of a header or source file
//! - `session`: Long-lived request loop for editor integrations
//! - `show-config`: Print the merged configuration
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod prompt;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity and route the `log` facade to it
    let logger = hswap::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Swap(cmd) => cmd.execute(&global).await,
        cli::Command::Session(cmd) => cmd.execute(&global).await,
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code. Exiting here also abandons any
    // terminal prompt still blocked on stdin.
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.should_report(global.verbose) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
