//! Workspace root discovery.

use std::path::{Path, PathBuf};

use crate::config::PROJECT_CONFIG_FILE;

/// Files or directories whose presence marks a workspace root.
pub const WORKSPACE_MARKERS: [&str; 2] = [PROJECT_CONFIG_FILE, ".git"];

/// Nearest ancestor of `start` (inclusive) holding one of
/// [`WORKSPACE_MARKERS`], or `start` itself when none does.
///
/// # Examples
///
/// ```no_run
/// use hswap::workspace::find_workspace_root;
/// use std::path::Path;
///
/// let root = find_workspace_root(Path::new("/work/project/src/net"));
/// println!("searching {}", root.display());
/// ```
#[must_use]
pub fn find_workspace_root(start: &Path) -> PathBuf {
    let found = start
        .ancestors()
        .find(|dir| WORKSPACE_MARKERS.iter().any(|marker| dir.join(marker).exists()));

    match found {
        Some(root) => {
            log::debug!("Workspace root: {}", root.display());
            root.to_path_buf()
        }
        None => {
            log::debug!(
                "No workspace marker above {}; searching there",
                start.display()
            );
            start.to_path_buf()
        }
    }
}
