//! Capabilities the swap search borrows from its host.
//!
//! The search never touches the filesystem or a human directly. Everything
//! slow or interactive goes through one of these traits, which keeps the
//! phase logic testable with in-memory fakes. Real implementations live in
//! [`crate::fs`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::swap::rank::SwapCandidate;

/// Directory listing used by the same-directory and common-root phases.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// Names of the entries directly inside `dir` (one level).
    async fn list_directory(&self, dir: &Path) -> Result<Vec<String>>;

    /// Paths of every file below `dir`, relative to `dir`.
    ///
    /// The walk can be large. Implementations should stop once `cancel`
    /// fires and return [`Error::SearchCancelled`](crate::Error::SearchCancelled).
    async fn list_directory_recursive(
        &self,
        dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>>;
}

/// Workspace-wide lookup by file stem.
#[async_trait]
pub trait WorkspaceSearcher: Send + Sync {
    /// Every file in the workspace whose stem equals `stem`, any extension.
    ///
    /// Implementations must stop promptly once `cancel` fires and return
    /// [`Error::SearchCancelled`](crate::Error::SearchCancelled).
    async fn search_workspace(&self, stem: &str, cancel: &CancellationToken)
        -> Result<Vec<PathBuf>>;
}

/// Opens a resolved path, e.g. in an editor.
#[async_trait]
pub trait PathOpener: Send + Sync {
    /// Open `path`. An error means the path is unusable.
    async fn open_path(&self, path: &Path) -> std::io::Result<()>;
}

/// Lets a human pick among several ranked candidates.
#[async_trait]
pub trait CandidateChooser: Send + Sync {
    /// Return the chosen path, or `None` if the choice was abandoned.
    async fn choose(&self, candidates: &[SwapCandidate]) -> Option<PathBuf>;
}
