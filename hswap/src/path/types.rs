//! Core types for path handling.

use std::path::{Path, PathBuf};

/// A file path split into the pieces the counterpart search works with.
///
/// `extension` keeps its leading dot (`".h"`), matching how extensions are
/// written in configuration. An empty extension means the file has none and
/// cannot be swapped.
///
/// # Examples
///
/// ```
/// use hswap::path::FileLocation;
/// use std::path::Path;
///
/// let loc = FileLocation::from_path(Path::new("/proj/include/widget.hpp"));
/// assert_eq!(loc.directory(), Path::new("/proj/include"));
/// assert_eq!(loc.stem(), "widget");
/// assert_eq!(loc.extension(), ".hpp");
/// assert!(loc.has_extension());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocation {
    directory: PathBuf,
    stem: String,
    extension: String,
}

impl FileLocation {
    /// Split a path into directory, stem, and dotted extension.
    ///
    /// Dot-files such as `.clang-format` have no extension; the whole name is
    /// the stem. Only the last extension counts, so `foo.tar.gz` has stem
    /// `foo.tar` and extension `.gz`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let (stem, extension) = split_name(path);
        Self {
            directory,
            stem,
            extension,
        }
    }

    /// The containing directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file name without its extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The extension including its leading dot, or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether the file has an extension at all.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Reassemble the full path.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}{}", self.stem, self.extension))
    }
}

/// Split the final component of `path` into `(stem, ".ext")`.
///
/// Returns empty strings for paths without a file name.
#[must_use]
pub fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, extension)
}
