//! Terminal picker for ambiguous swaps.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use hswap::swap::CandidateChooser;
use hswap::SwapCandidate;

/// Prompt title shown above the candidate list.
pub const PLACEHOLDER: &str = "Choose swap file";

/// Lists candidates on stderr and reads a number from stdin.
///
/// Empty or out-of-range input abandons the choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptChooser;

#[async_trait]
impl CandidateChooser for PromptChooser {
    async fn choose(&self, candidates: &[SwapCandidate]) -> Option<PathBuf> {
        let candidates = candidates.to_vec();
        tokio::task::spawn_blocking(move || {
            let stderr = io::stderr();
            let stdin = io::stdin();
            prompt(&candidates, &mut stdin.lock(), &mut stderr.lock())
        })
        .await
        .ok()
        .flatten()
    }
}

fn prompt(
    candidates: &[SwapCandidate],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Option<PathBuf> {
    render(candidates, output).ok()?;

    let mut line = String::new();
    if input.read_line(&mut line).ok()? == 0 {
        return None;
    }

    let index: usize = line.trim().parse().ok()?;
    index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .map(|c| c.full_path.clone())
}

fn render(candidates: &[SwapCandidate], output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{PLACEHOLDER}:")?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(
            output,
            "  {:>2}) {}  {}",
            i + 1,
            candidate.display_label,
            candidate.full_path.display()
        )?;
    }
    write!(output, "> ")?;
    output.flush()
}
