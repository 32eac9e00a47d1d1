//! Swap command implementation.
//!
//! Resolves the counterpart of one file, opens it, and prints its path.

use crate::error::CliError;
use crate::utils::{
    build_swapper, interrupt_token, load_configuration, resolve_path, resolve_workspace,
    GlobalOptions, PickMode, SwapOptions,
};
use clap::Args;
use hswap::SwapOutcome;
use std::path::PathBuf;

/// Print the counterpart of a header or source file.
#[derive(Args)]
pub struct SwapCommand {
    /// File to swap from
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How to settle several equally plausible counterparts
    #[arg(long, value_enum, default_value_t = PickMode::Prompt)]
    pub pick: PickMode,

    #[command(flatten)]
    pub options: SwapOptions,
}

impl SwapCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let file = resolve_path(&self.file)?;
        let dir = file.parent().map(PathBuf::from).ok_or_else(|| {
            CliError::InvalidArguments(format!("Not a file: {}", file.display()))
        })?;

        let workspace = resolve_workspace(self.options.workspace.as_deref(), &dir)?;
        let config = load_configuration(global, &dir)?;
        let mut swapper = build_swapper(&config, &workspace, &self.options, self.pick)?;

        let cancel = interrupt_token();
        match swapper.swap(&file, &cancel).await? {
            SwapOutcome::Opened { path, from_cache } => {
                log::debug!("Opened {} (cached: {from_cache})", path.display());
                println!("{}", path.display());
                Ok(())
            }
            SwapOutcome::Ambiguous(candidates) => {
                for candidate in &candidates {
                    println!("{}", candidate.full_path.display());
                }
                Err(CliError::Ambiguous(candidates.len()))
            }
            SwapOutcome::NotFound => Err(CliError::NotFound(file)),
        }
    }
}
