//! The swap operation: cache, search, disambiguate, open, remember.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::cache::SwapCache;
use crate::config::ExtensionClassification;
use crate::error::{Error, Result};
use crate::path::FileLocation;
use crate::swap::collaborators::{CandidateChooser, PathOpener};
use crate::swap::rank::SwapCandidate;
use crate::swap::resolver::{Resolution, SwapResolver};

/// Result of a swap request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The counterpart was opened.
    Opened {
        /// The counterpart path.
        path: PathBuf,
        /// Whether the path came from the cache rather than a search.
        from_cache: bool,
    },
    /// Several candidates qualify and no chooser is configured. Pass the
    /// picked path to [`Swapper::confirm`].
    Ambiguous(Vec<SwapCandidate>),
    /// No counterpart, or the request was cancelled.
    NotFound,
}

/// Runs swap requests against a resolver and a process-lifetime cache.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use hswap::fs::{ExistenceOpener, LocalFileSystem};
/// use hswap::swap::{SwapOutcome, SwapResolver, Swapper};
/// use hswap::{Config, SwapCache};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn demo() -> hswap::Result<()> {
/// let config = Config::defaults();
/// let fs = Arc::new(LocalFileSystem::new("/work/project", &config.workspace_search()));
/// let resolver = SwapResolver::new(fs.clone(), fs);
/// let mut swapper = Swapper::new(resolver, config.classification(), Arc::new(ExistenceOpener))
///     .with_cache(SwapCache::with_caching_disabled(config.is_caching_disabled()));
///
/// let outcome = swapper
///     .swap(Path::new("/work/project/include/foo.h"), &CancellationToken::new())
///     .await?;
/// if let SwapOutcome::Opened { path, .. } = outcome {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Swapper {
    resolver: SwapResolver,
    classification: ExtensionClassification,
    cache: SwapCache,
    opener: Arc<dyn PathOpener>,
    chooser: Option<Arc<dyn CandidateChooser>>,
}

impl Swapper {
    /// Create a swapper with an empty, enabled cache and no chooser.
    pub fn new(
        resolver: SwapResolver,
        classification: ExtensionClassification,
        opener: Arc<dyn PathOpener>,
    ) -> Self {
        Self {
            resolver,
            classification,
            cache: SwapCache::new(),
            opener,
            chooser: None,
        }
    }

    /// Use `cache` instead of a fresh one.
    #[must_use]
    pub fn with_cache(mut self, cache: SwapCache) -> Self {
        self.cache = cache;
        self
    }

    /// Let `chooser` settle ambiguous results.
    #[must_use]
    pub fn with_chooser(mut self, chooser: Arc<dyn CandidateChooser>) -> Self {
        self.chooser = Some(chooser);
        self
    }

    /// The pair cache.
    #[must_use]
    pub fn cache(&self) -> &SwapCache {
        &self.cache
    }

    /// Mutable access to the pair cache, e.g. to toggle the caching policy.
    pub fn cache_mut(&mut self) -> &mut SwapCache {
        &mut self.cache
    }

    /// Swap from `file` to its counterpart and open it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenFailed`] when a freshly resolved counterpart
    /// cannot be opened. Nothing is cached in that case. A cached counterpart
    /// that no longer opens is dropped from the cache and the search runs
    /// again instead.
    pub async fn swap(&mut self, file: &Path, cancel: &CancellationToken) -> Result<SwapOutcome> {
        let location = FileLocation::from_path(file);
        if !location.has_extension() {
            log::debug!("{} has no extension; nothing to swap to", file.display());
            return Ok(SwapOutcome::NotFound);
        }

        if let Some(cached) = self.cache.get(file).map(Path::to_path_buf) {
            match self.opener.open_path(&cached).await {
                Ok(()) => {
                    log::debug!("Cache hit: {}", cached.display());
                    return Ok(SwapOutcome::Opened {
                        path: cached,
                        from_cache: true,
                    });
                }
                Err(e) => {
                    log::debug!("Dropping stale cache entry {}: {e}", cached.display());
                    self.cache.remove(file);
                }
            }
        }

        let resolved = match self
            .resolver
            .resolve(&location, &self.classification, cancel)
            .await
        {
            Resolution::Found(path) => path,
            Resolution::NotFound => return Ok(SwapOutcome::NotFound),
            Resolution::Ambiguous(candidates) => {
                let Some(chooser) = self.chooser.clone() else {
                    return Ok(SwapOutcome::Ambiguous(candidates));
                };
                let choice = tokio::select! {
                    biased;
                    () = cancel.cancelled() => None,
                    choice = chooser.choose(&candidates) => choice,
                };
                match choice {
                    Some(path) => path,
                    None => return Ok(SwapOutcome::NotFound),
                }
            }
        };

        self.confirm(file, &resolved).await
    }

    /// Open `counterpart` and, if that works, remember it as the pair of `file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenFailed`] when `counterpart` cannot be opened.
    pub async fn confirm(&mut self, file: &Path, counterpart: &Path) -> Result<SwapOutcome> {
        self.opener
            .open_path(counterpart)
            .await
            .map_err(|source| Error::OpenFailed {
                path: counterpart.to_path_buf(),
                source,
            })?;

        self.cache.add(file, counterpart);
        Ok(SwapOutcome::Opened {
            path: counterpart.to_path_buf(),
            from_cache: false,
        })
    }
}
