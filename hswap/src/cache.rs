//! Bidirectional cache of resolved counterpart pairs.
//!
//! Once `foo.h` has been swapped to `foo.c`, the pair is remembered in both
//! directions so that swapping back from either file skips the search. Keys
//! go through [`normalize_key`], so case and separator variants of a path
//! hit the same entry.
//!
//! The cache lives for the lifetime of the process. Nothing is persisted and
//! nothing expires; entries are dropped only when a cached destination fails
//! to open and the caller calls [`SwapCache::remove`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::path::normalize::lexical_normalize;
use crate::path::normalize_key;

/// Process-lifetime cache of counterpart pairs.
///
/// Values keep the original spelling of the counterpart (lexically cleaned
/// but not lower-cased) so that returned paths still open on case-sensitive
/// filesystems.
///
/// # Examples
///
/// ```
/// use hswap::SwapCache;
/// use std::path::Path;
///
/// let mut cache = SwapCache::new();
/// cache.add(Path::new("/proj/foo.h"), Path::new("/proj/foo.c"));
///
/// assert_eq!(cache.get(Path::new("/PROJ/FOO.H")).unwrap(), Path::new("/proj/foo.c"));
/// assert_eq!(cache.get(Path::new("/proj/foo.c")).unwrap(), Path::new("/proj/foo.h"));
/// ```
#[derive(Debug, Default)]
pub struct SwapCache {
    entries: HashMap<String, PathBuf>,
    disabled: bool,
}

impl SwapCache {
    /// Create an empty cache with caching enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache, disabled when `disabled` is true.
    #[must_use]
    pub fn with_caching_disabled(disabled: bool) -> Self {
        Self {
            entries: HashMap::new(),
            disabled,
        }
    }

    /// Whether caching is currently switched off by policy.
    #[must_use]
    pub fn is_caching_disabled(&self) -> bool {
        self.disabled
    }

    /// Switch caching off or on.
    ///
    /// Existing entries are kept but become invisible to [`get`](Self::get)
    /// while disabled.
    pub fn set_caching_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Remember that `source` and `swapped` are counterparts.
    ///
    /// Both directions are stored, overwriting whatever either key mapped to
    /// before. No-op while caching is disabled.
    pub fn add(&mut self, source: &Path, swapped: &Path) {
        if self.disabled {
            return;
        }

        log::debug!(
            "Caching pair {} <-> {}",
            source.display(),
            swapped.display()
        );
        self.entries
            .insert(normalize_key(source), lexical_normalize(swapped));
        self.entries
            .insert(normalize_key(swapped), lexical_normalize(source));
    }

    /// Forget the counterpart recorded for `path`.
    ///
    /// The reverse entry is dropped too when it still points back at `path`,
    /// so a stale pair cannot be served from the other side. Removing an
    /// absent key is a no-op. Works regardless of the caching policy.
    pub fn remove(&mut self, path: &Path) {
        let key = normalize_key(path);
        let Some(counterpart) = self.entries.remove(&key) else {
            return;
        };

        let reverse_key = normalize_key(&counterpart);
        let points_back = self
            .entries
            .get(&reverse_key)
            .is_some_and(|back| normalize_key(back) == key);
        if points_back {
            self.entries.remove(&reverse_key);
        }
    }

    /// Look up the counterpart recorded for `path`.
    ///
    /// Always `None` while caching is disabled, even if an entry exists.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Path> {
        if self.disabled {
            return None;
        }
        self.entries.get(&normalize_key(path)).map(PathBuf::as_path)
    }

    /// Number of stored mapping entries (two per pair).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
