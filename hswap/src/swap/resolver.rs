//! The phased counterpart search.
//!
//! Phases run in order and stop at the first hit:
//!
//! 1. same directory as the file
//! 2. everything below the "common root", the directory above the first
//!    `include` (or, failing that, `src`) segment of the file's path
//! 3. the whole workspace, by stem, with ranking when several files match
//!
//! The cache lookup that precedes these phases, and the cache write that
//! follows a successful open, belong to [`Swapper`](crate::swap::Swapper).
//! The resolver itself keeps no state between calls.

use std::collections::BTreeSet;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::ExtensionClassification;
use crate::error::{Error, Result};
use crate::path::{split_name, FileLocation};
use crate::swap::collaborators::{DirectoryLister, WorkspaceSearcher};
use crate::swap::rank::{rank_candidates, SwapCandidate};

/// Directory names that anchor the common-root phase, in priority order.
pub const COMMON_ROOT_SEGMENTS: [&str; 2] = ["include", "src"];

/// Outcome of a counterpart search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A single counterpart was found.
    Found(PathBuf),
    /// Several workspace files qualify, best match first.
    Ambiguous(Vec<SwapCandidate>),
    /// Nothing qualifies, or the search was cancelled.
    NotFound,
}

/// Stateless phased search over injected collaborators.
#[derive(Clone)]
pub struct SwapResolver {
    lister: Arc<dyn DirectoryLister>,
    searcher: Arc<dyn WorkspaceSearcher>,
    search_timeout: Option<Duration>,
}

impl SwapResolver {
    /// Create a resolver with no workspace search timeout.
    pub fn new(lister: Arc<dyn DirectoryLister>, searcher: Arc<dyn WorkspaceSearcher>) -> Self {
        Self {
            lister,
            searcher,
            search_timeout: None,
        }
    }

    /// Abandon the common-root walk or the workspace-wide search after
    /// `timeout`.
    #[must_use]
    pub fn with_search_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Find the counterpart of `location`.
    ///
    /// A file without an extension resolves to [`Resolution::NotFound`]
    /// without consulting any collaborator. Listing failures and a timed-out
    /// walk only skip their phase. Cancellation through `cancel` at any
    /// point yields [`Resolution::NotFound`] without running later phases.
    pub async fn resolve(
        &self,
        location: &FileLocation,
        classification: &ExtensionClassification,
        cancel: &CancellationToken,
    ) -> Resolution {
        if !location.has_extension() {
            return Resolution::NotFound;
        }

        let search_exts = classification.search_extensions_for(location.extension());
        if search_exts.is_empty() {
            log::debug!(
                "No counterpart extensions configured for '{}'",
                location.extension()
            );
            return Resolution::NotFound;
        }

        if let Some(found) = self.search_same_directory(location, search_exts, cancel).await {
            log::debug!("Found counterpart in same directory: {}", found.display());
            return Resolution::Found(found);
        }
        if cancel.is_cancelled() {
            log::debug!("Search cancelled before the common-root phase");
            return Resolution::NotFound;
        }

        if let Some(found) = self.search_common_root(location, search_exts, cancel).await {
            log::debug!("Found counterpart under common root: {}", found.display());
            return Resolution::Found(found);
        }
        if cancel.is_cancelled() {
            log::debug!("Search cancelled before the workspace phase");
            return Resolution::NotFound;
        }

        self.search_workspace(location, search_exts, cancel).await
    }

    async fn search_same_directory(
        &self,
        location: &FileLocation,
        search_exts: &BTreeSet<String>,
        cancel: &CancellationToken,
    ) -> Option<PathBuf> {
        let dir = location.directory();
        let listing = tokio::select! {
            biased;
            () = cancel.cancelled() => return None,
            listing = self.lister.list_directory(dir) => listing,
        };
        let entries = match listing {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => {
                log::debug!("{} does not exist; skipping to common root", dir.display());
                return None;
            }
            Err(e) => {
                log::debug!("Skipping same-directory phase for {}: {e}", dir.display());
                return None;
            }
        };

        entries
            .into_iter()
            .find(|name| is_counterpart(Path::new(name), location.stem(), search_exts))
            .map(|name| dir.join(name))
    }

    async fn search_common_root(
        &self,
        location: &FileLocation,
        search_exts: &BTreeSet<String>,
        cancel: &CancellationToken,
    ) -> Option<PathBuf> {
        let root = common_root(location.directory())?;
        let walk_cancel = cancel.child_token();
        let walk = self.lister.list_directory_recursive(&root, &walk_cancel);
        let what = format!("Common-root walk under {}", root.display());

        let files = match self.bounded(&what, &walk_cancel, walk).await {
            Ok(files) => files,
            Err(e) => {
                log::debug!("Skipping common-root phase for {}: {e}", root.display());
                return None;
            }
        };

        files
            .into_iter()
            .find(|file| is_counterpart(file, location.stem(), search_exts))
            .map(|file| root.join(file))
    }

    async fn search_workspace(
        &self,
        location: &FileLocation,
        search_exts: &BTreeSet<String>,
        cancel: &CancellationToken,
    ) -> Resolution {
        log::info!("Searching workspace for '{}'...", location.stem());

        let search_cancel = cancel.child_token();
        let search = self
            .searcher
            .search_workspace(location.stem(), &search_cancel);
        let what = format!("Workspace search for '{}'", location.stem());

        let paths = match self.bounded(&what, &search_cancel, search).await {
            Ok(paths) => paths,
            Err(e) if e.is_cancelled() => {
                log::debug!("Workspace search cancelled");
                return Resolution::NotFound;
            }
            Err(e) => {
                log::debug!("Workspace search failed: {e}");
                return Resolution::NotFound;
            }
        };

        let mut candidates: Vec<SwapCandidate> = paths
            .into_iter()
            .filter(|path| is_counterpart(path, location.stem(), search_exts))
            .map(SwapCandidate::new)
            .collect();

        match candidates.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Found(candidates.remove(0).full_path),
            _ => {
                rank_candidates(location.directory(), &mut candidates);
                Resolution::Ambiguous(candidates)
            }
        }
    }

    /// Drive `work` until it finishes, `token` fires, or the search timeout
    /// elapses. `token` is cancelled on return so a walk still running on
    /// the blocking pool stops too.
    async fn bounded<T>(
        &self,
        what: &str,
        token: &CancellationToken,
        work: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let timed = async {
            match self.search_timeout {
                Some(limit) => tokio::time::timeout(limit, work).await.ok(),
                None => Some(work.await),
            }
        };

        let outcome = tokio::select! {
            biased;
            () = token.cancelled() => Err(Error::SearchCancelled),
            result = timed => result.unwrap_or_else(|| {
                log::warn!("{what} timed out");
                Err(Error::SearchCancelled)
            }),
        };
        token.cancel();
        outcome
    }
}

/// The directory above the first `include` segment of `directory`, or above
/// the first `src` segment if there is no `include`.
///
/// Returns `None` when neither segment occurs or when the anchor sits
/// directly under the filesystem root.
///
/// # Examples
///
/// ```
/// use hswap::swap::common_root;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     common_root(Path::new("/work/lib/src/detail/include/x")),
///     Some(PathBuf::from("/work/lib/src/detail")),
/// );
/// assert_eq!(common_root(Path::new("/work/lib/src/a")), Some(PathBuf::from("/work/lib")));
/// assert_eq!(common_root(Path::new("/work/lib")), None);
/// ```
#[must_use]
pub fn common_root(directory: &Path) -> Option<PathBuf> {
    let components: Vec<Component<'_>> = directory.components().collect();
    let anchor = COMMON_ROOT_SEGMENTS.iter().find_map(|segment| {
        components
            .iter()
            .position(|c| matches!(c, Component::Normal(name) if name.to_str() == Some(*segment)))
    })?;

    let root: PathBuf = components[..anchor].iter().collect();
    let has_named_dir = root
        .components()
        .any(|c| matches!(c, Component::Normal(_)));
    has_named_dir.then_some(root)
}

fn is_counterpart(path: &Path, stem: &str, search_exts: &BTreeSet<String>) -> bool {
    let (candidate_stem, candidate_ext) = split_name(path);
    candidate_stem == stem && search_exts.contains(&candidate_ext)
}
