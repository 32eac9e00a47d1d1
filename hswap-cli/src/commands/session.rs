//! Session command implementation.
//!
//! A long-lived swap loop for editor integrations. Requests arrive one per
//! line on stdin and each gets exactly one JSON line on stdout:
//!
//! - `FILE` swaps from `FILE`.
//! - `FILE<TAB>COUNTERPART` confirms a pick after an `ambiguous` reply.
//!
//! The pair cache lives as long as the session, so repeated swaps between
//! the same files skip the search.

use crate::error::CliError;
use crate::utils::{
    build_swapper, interrupt_token, load_configuration, resolve_path, resolve_workspace,
    GlobalOptions, PickMode, SwapOptions,
};
use clap::Args;
use hswap::{SwapCandidate, SwapOutcome, Swapper};
use serde::Serialize;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Answer swap requests read from stdin until it closes.
#[derive(Args)]
pub struct SessionCommand {
    /// How to settle several equally plausible counterparts
    #[arg(long, value_enum, default_value_t = PickMode::Report)]
    pub pick: PickMode,

    #[command(flatten)]
    pub options: SwapOptions,
}

/// One reply line.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionReply {
    Resolved {
        file: PathBuf,
        counterpart: PathBuf,
        from_cache: bool,
    },
    Ambiguous {
        file: PathBuf,
        candidates: Vec<SwapCandidate>,
    },
    NotFound {
        file: PathBuf,
    },
    Error {
        file: PathBuf,
        message: String,
    },
}

impl SessionCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.pick == PickMode::Prompt {
            return Err(CliError::InvalidArguments(
                "--pick prompt is unavailable in a session; stdin carries requests".to_string(),
            ));
        }

        let cwd = env::current_dir()?;
        let workspace = resolve_workspace(self.options.workspace.as_deref(), &cwd)?;
        let config = load_configuration(global, &workspace)?;
        let mut swapper = build_swapper(&config, &workspace, &self.options, self.pick)?;
        log::info!("Session started in {}", workspace.display());

        let session = interrupt_token();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = tokio::select! {
                () = session.cancelled() => break,
                line = lines.next_line() => line?,
            };
            let Some(line) = line else { break };
            let request = line.trim();
            if request.is_empty() {
                continue;
            }

            let reply = handle(&mut swapper, request, &session).await;
            emit(&reply)?;
        }

        log::info!("Session ended");
        Ok(())
    }
}

async fn handle(swapper: &mut Swapper, request: &str, cancel: &CancellationToken) -> SessionReply {
    let (file, chosen) = match request.split_once('\t') {
        Some((file, chosen)) => (file, Some(chosen)),
        None => (request, None),
    };

    let file = match resolve_path(Path::new(file)) {
        Ok(path) => path,
        Err(e) => {
            return SessionReply::Error {
                file: PathBuf::from(file),
                message: e.to_string(),
            };
        }
    };

    let result = match chosen {
        Some(chosen) => match resolve_path(Path::new(chosen)) {
            Ok(chosen) => swapper.confirm(&file, &chosen).await.map_err(CliError::from),
            Err(e) => Err(e),
        },
        None => swapper
            .swap(&file, &cancel.child_token())
            .await
            .map_err(CliError::from),
    };

    match result {
        Ok(SwapOutcome::Opened { path, from_cache }) => SessionReply::Resolved {
            file,
            counterpart: path,
            from_cache,
        },
        Ok(SwapOutcome::Ambiguous(candidates)) => SessionReply::Ambiguous { file, candidates },
        Ok(SwapOutcome::NotFound) => SessionReply::NotFound { file },
        Err(e) => SessionReply::Error {
            file,
            message: e.to_string(),
        },
    }
}

fn emit(reply: &SessionReply) -> Result<(), CliError> {
    let json = serde_json::to_string(reply).map_err(std::io::Error::from)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;
    Ok(())
}
