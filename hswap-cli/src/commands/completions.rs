//! `hswap completions <SHELL>`: print a completion script on stdout.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Installed binary name, set by the build script from the `[[bin]]` target.
pub const BIN_NAME: &str = env!("HSWAP_BIN_NAME");

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# To enable: {hint}");
            }
        }
        self.write_to(&mut io::stdout().lock())
    }

    fn write_to(&self, out: &mut impl Write) -> Result<(), CliError> {
        generate(self.shell, &mut Cli::command(), BIN_NAME, out);
        out.flush()?;
        Ok(())
    }
}

/// One-line setup for shells that load completions from a command.
fn install_hint(shell: Shell) -> Option<String> {
    match shell {
        Shell::Bash => Some(format!("source <({BIN_NAME} completions bash)")),
        Shell::Zsh => Some(format!("{BIN_NAME} completions zsh > \"${{fpath[1]}}/_{BIN_NAME}\"")),
        Shell::Fish => Some(format!("{BIN_NAME} completions fish | source")),
        _ => None,
    }
}
