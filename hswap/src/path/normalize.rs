//! Path normalization functions.
//!
//! Two flavors live here:
//! - [`normalize`] turns user input into an absolute path (tilde expansion,
//!   current directory, `.`/`..` resolution).
//! - [`normalize_key`] turns any path into a cache key: lower-cased and
//!   lexically cleaned, with no filesystem access and no error cases.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use hswap::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the root directory.
///
/// # Examples
///
/// ```
/// use hswap::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path to absolute form.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot be
/// determined, or the path contains too many `..` components.
///
/// # Examples
///
/// ```no_run
/// use hswap::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src/main.c")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}

/// Lexically clean a path without touching the filesystem.
///
/// Like [`resolve_components`], but never fails: `..` at the root is dropped
/// and leading `..` of a relative path is kept. Redundant separators and `.`
/// segments disappear. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use hswap::path::normalize::lexical_normalize;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(lexical_normalize(Path::new("/a//b/./c/..")), PathBuf::from("/a/b"));
/// assert_eq!(lexical_normalize(Path::new("../x/./y")), PathBuf::from("../x/y"));
/// ```
#[must_use]
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Canonicalize a path into a cache key.
///
/// The key is the lower-cased, lexically normalized form of the path, so two
/// spellings of the same file that differ only in case, redundant
/// separators, or `.`/`..` segments produce the same key. Pure: no I/O.
///
/// # Examples
///
/// ```
/// use hswap::path::normalize_key;
/// use std::path::Path;
///
/// assert_eq!(
///     normalize_key(Path::new("/Proj/Include/../src//Foo.C")),
///     normalize_key(Path::new("/proj/src/foo.c")),
/// );
/// ```
#[must_use]
pub fn normalize_key(path: &Path) -> String {
    let lowered = path.to_string_lossy().to_lowercase();
    lexical_normalize(Path::new(&lowered))
        .to_string_lossy()
        .into_owned()
}
