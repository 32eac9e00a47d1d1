//! Ordering of workspace-wide candidates.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A possible counterpart found by the workspace-wide search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapCandidate {
    /// Full path of the candidate.
    pub full_path: PathBuf,
    /// Short label for pickers: the file name.
    pub display_label: String,
}

impl SwapCandidate {
    /// Build a candidate, labelling it with its file name.
    #[must_use]
    pub fn new(full_path: PathBuf) -> Self {
        let display_label = full_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| full_path.to_string_lossy().into_owned());
        Self {
            full_path,
            display_label,
        }
    }
}

/// Length of the common leading run of characters, ignoring case.
///
/// # Examples
///
/// ```
/// use hswap::swap::matching_prefix_len;
///
/// assert_eq!(matching_prefix_len("/Proj/Src", "/proj/include/x.h"), 6);
/// assert_eq!(matching_prefix_len("abc", "abc"), 3);
/// assert_eq!(matching_prefix_len("", "abc"), 0);
/// ```
#[must_use]
pub fn matching_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .flat_map(char::to_lowercase)
        .zip(b.chars().flat_map(char::to_lowercase))
        .take_while(|(x, y)| x == y)
        .count()
}

/// Sort candidates so those sharing the longest prefix with `directory`
/// come first. Ties keep their discovery order.
///
/// # Examples
///
/// ```
/// use hswap::swap::{rank_candidates, SwapCandidate};
/// use std::path::Path;
///
/// let mut candidates: Vec<SwapCandidate> = ["a/b/x.c", "q/x.c", "a/y/x.c"]
///     .iter()
///     .map(|p| SwapCandidate::new(p.into()))
///     .collect();
/// rank_candidates(Path::new("a/b"), &mut candidates);
/// assert_eq!(candidates[0].full_path, Path::new("a/b/x.c"));
/// ```
pub fn rank_candidates(directory: &Path, candidates: &mut [SwapCandidate]) {
    let directory = directory.to_string_lossy();
    // sort_by_cached_key is stable
    candidates.sort_by_cached_key(|candidate| {
        std::cmp::Reverse(matching_prefix_len(
            &directory,
            &candidate.full_path.to_string_lossy(),
        ))
    });
}
