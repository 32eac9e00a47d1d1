//! Non-interactive candidate choosers.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::swap::collaborators::CandidateChooser;
use crate::swap::rank::SwapCandidate;

/// Always takes the best-ranked candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

#[async_trait]
impl CandidateChooser for FirstChooser {
    async fn choose(&self, candidates: &[SwapCandidate]) -> Option<PathBuf> {
        candidates.first().map(|c| c.full_path.clone())
    }
}

/// Never chooses, so ambiguity resolves to "not found".
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineChooser;

#[async_trait]
impl CandidateChooser for DeclineChooser {
    async fn choose(&self, _candidates: &[SwapCandidate]) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_chooser() {
        let candidates = vec![
            SwapCandidate::new(PathBuf::from("/a/x.c")),
            SwapCandidate::new(PathBuf::from("/b/x.c")),
        ];
        assert_eq!(
            FirstChooser.choose(&candidates).await,
            Some(PathBuf::from("/a/x.c"))
        );
        assert_eq!(FirstChooser.choose(&[]).await, None);
    }

    #[tokio::test]
    async fn test_decline_chooser() {
        let candidates = vec![SwapCandidate::new(PathBuf::from("/a/x.c"))];
        assert_eq!(DeclineChooser.choose(&candidates).await, None);
    }
}
