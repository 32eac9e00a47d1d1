//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, configuration loading, and assembling a
//! [`Swapper`] from command-line options.

use crate::error::CliError;
use crate::prompt::PromptChooser;
use clap::{Args, ValueEnum};
use hswap::fs::{CommandOpener, ExistenceOpener, LocalFileSystem};
use hswap::path::normalize;
use hswap::swap::{CandidateChooser, DeclineChooser, FirstChooser, PathOpener};
use hswap::workspace::find_workspace_root;
use hswap::{Config, ConfigBuilder, SwapCache, SwapResolver, Swapper};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// What to do when several counterparts qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PickMode {
    /// Ask on the terminal
    Prompt,
    /// Take the best-ranked candidate
    First,
    /// Treat ambiguity as "not found"
    None,
    /// Report the ranked candidates without opening any
    Report,
}

/// Options shared by commands that perform swaps.
#[derive(Args, Debug, Clone)]
pub struct SwapOptions {
    /// Workspace root for the project-wide search (default: nearest
    /// directory holding hswap.yaml or .git)
    #[arg(long, value_name = "DIR", env = "HSWAP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Command used to open the counterpart; the path is appended
    #[arg(long, value_name = "CMD", env = "HSWAP_OPEN_WITH")]
    pub open_with: Option<String>,

    /// Do not remember resolved pairs
    #[arg(long)]
    pub no_cache: bool,
}

/// Resolve a user-supplied path.
///
/// Makes the path absolute and expands `~`, but doesn't follow symlinks, so
/// the result matches what an editor shows for the file.
pub fn resolve_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize::normalize(path).map_err(CliError::from)
}

/// Load hierarchical configuration for `working_dir`.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project configuration files found above `working_dir`
/// 3. User configuration (`--config-dir` or `~/.hswap`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, working_dir: &Path) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_working_dir(working_dir)
        .with_config_dir(global.config_dir.as_deref())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The workspace root: explicit, or discovered from `start`.
pub fn resolve_workspace(explicit: Option<&Path>, start: &Path) -> Result<PathBuf, CliError> {
    match explicit {
        Some(dir) => {
            let dir = resolve_path(dir)?;
            if !dir.is_dir() {
                return Err(CliError::InvalidArguments(format!(
                    "Workspace is not a directory: {}",
                    dir.display()
                )));
            }
            Ok(dir)
        }
        None => Ok(find_workspace_root(start)),
    }
}

/// Assemble a swapper for `workspace` from configuration and options.
pub fn build_swapper(
    config: &Config,
    workspace: &Path,
    options: &SwapOptions,
    pick: PickMode,
) -> Result<Swapper, CliError> {
    let search = config.workspace_search();
    let fs = Arc::new(LocalFileSystem::new(workspace, &search));
    let resolver = SwapResolver::new(fs.clone(), fs)
        .with_search_timeout(Some(Duration::from_secs(search.timeout_seconds)));

    let opener: Arc<dyn PathOpener> = match options.open_with.as_deref() {
        Some(command) => Arc::new(CommandOpener::parse(command).ok_or_else(|| {
            CliError::InvalidArguments("--open-with must name a command".to_string())
        })?),
        None => Arc::new(ExistenceOpener),
    };

    let cache = SwapCache::with_caching_disabled(config.is_caching_disabled() || options.no_cache);
    let swapper = Swapper::new(resolver, config.classification(), opener).with_cache(cache);

    Ok(match chooser_for(pick) {
        Some(chooser) => swapper.with_chooser(chooser),
        None => swapper,
    })
}

fn chooser_for(pick: PickMode) -> Option<Arc<dyn CandidateChooser>> {
    match pick {
        PickMode::Prompt => Some(Arc::new(PromptChooser)),
        PickMode::First => Some(Arc::new(FirstChooser)),
        PickMode::None => Some(Arc::new(DeclineChooser)),
        PickMode::Report => None,
    }
}

/// A token cancelled by Ctrl-C.
pub fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("Interrupted; cancelling");
            trigger.cancel();
        }
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_makes_absolute() {
        let resolved = resolve_path(Path::new("src/../include/foo.h")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("include/foo.h"));
    }

    #[test]
    fn test_resolve_workspace_rejects_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.h");
        std::fs::write(&file, "").unwrap();

        let result = resolve_workspace(Some(&file), temp.path());
        assert!(matches!(result, Err(CliError::InvalidArguments(_))));
    }

    #[test]
    fn test_chooser_for_report_is_none() {
        assert!(chooser_for(PickMode::Report).is_none());
        assert!(chooser_for(PickMode::First).is_some());
    }
}
