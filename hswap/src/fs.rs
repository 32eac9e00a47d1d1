//! Filesystem-backed collaborators.
//!
//! [`LocalFileSystem`] answers the listing and workspace-search queries of
//! [`SwapResolver`](crate::swap::SwapResolver). Blocking directory walks run
//! on tokio's blocking pool. [`ExistenceOpener`] and [`CommandOpener`] are
//! the two stock [`PathOpener`]s.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

use crate::config::WorkspaceSearchConfig;
use crate::error::{Error, Result};
use crate::path::split_name;
use crate::swap::{DirectoryLister, PathOpener, WorkspaceSearcher};

/// Directory listing and workspace search over the local disk.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    workspace_root: PathBuf,
    max_results: usize,
    respect_ignore_files: bool,
}

impl LocalFileSystem {
    /// Search below `workspace_root` with the given limits.
    pub fn new(workspace_root: impl Into<PathBuf>, search: &WorkspaceSearchConfig) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            max_results: search.max_results,
            respect_ignore_files: search.respect_ignore_files,
        }
    }

    /// The directory the workspace search starts from.
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }
}

#[async_trait]
impl DirectoryLister for LocalFileSystem {
    async fn list_directory(&self, dir: &Path) -> Result<Vec<String>> {
        let mut reader = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = reader.next_entry().await? {
            let is_dir = entry.file_type().await.map(|file_type| file_type.is_dir());
            if let Some(name) = listed_name(dir, entry.file_name(), is_dir) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    async fn list_directory_recursive(
        &self,
        dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>> {
        let metadata = tokio::fs::metadata(dir).await?;
        if !metadata.is_dir() {
            return Err(Error::InvalidPath {
                path: dir.to_path_buf(),
                reason: "not a directory".into(),
            });
        }

        let root = dir.to_path_buf();
        let cancel = cancel.clone();
        tokio::task::spawn_blocking(move || walk_files(&root, &cancel))
            .await
            .map_err(|e| Error::SearchFailed {
                root: dir.to_path_buf(),
                reason: e.to_string(),
            })?
    }
}

/// The UTF-8 name of a non-directory entry. An entry whose type can't be
/// read, e.g. one deleted mid-listing, is skipped.
fn listed_name(dir: &Path, name: OsString, is_dir: io::Result<bool>) -> Option<String> {
    match is_dir {
        Ok(true) => return None,
        Ok(false) => {}
        Err(e) => {
            log::debug!("Skipping entry {name:?} in {}: {e}", dir.display());
            return None;
        }
    }

    match name.into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            log::debug!("Skipping non-UTF-8 entry {raw:?} in {}", dir.display());
            None
        }
    }
}

/// Files below `root`, relative to it. Within each directory, files come
/// before subdirectories and both are ordered by name.
fn walk_files(root: &Path, cancel: &CancellationToken) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by(|a, b| match (a.file_type().is_dir(), b.file_type().is_dir()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.file_name().cmp(b.file_name()),
        });

    let mut files = Vec::new();
    for entry in walker {
        if cancel.is_cancelled() {
            return Err(Error::SearchCancelled);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }

    Ok(files)
}

#[async_trait]
impl WorkspaceSearcher for LocalFileSystem {
    async fn search_workspace(
        &self,
        stem: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>> {
        let root = self.workspace_root.clone();
        let stem = stem.to_string();
        let cancel = cancel.clone();
        let max_results = self.max_results;
        let respect_ignore_files = self.respect_ignore_files;

        tokio::task::spawn_blocking(move || {
            search_by_stem(&root, &stem, &cancel, max_results, respect_ignore_files)
        })
        .await
        .map_err(|e| Error::SearchFailed {
            root: self.workspace_root.clone(),
            reason: e.to_string(),
        })?
    }
}

fn search_by_stem(
    root: &Path,
    stem: &str,
    cancel: &CancellationToken,
    max_results: usize,
    respect_ignore_files: bool,
) -> Result<Vec<PathBuf>> {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(respect_ignore_files)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut matches = Vec::new();
    for entry in walker {
        if cancel.is_cancelled() {
            return Err(Error::SearchCancelled);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping entry during workspace search: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if split_name(entry.path()).0 != stem {
            continue;
        }

        matches.push(entry.into_path());
        if matches.len() >= max_results {
            log::warn!(
                "Workspace search for '{stem}' stopped at {max_results} results; some files were not considered"
            );
            break;
        }
    }

    Ok(matches)
}

/// Treats a path as opened once it can be opened for reading as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistenceOpener;

#[async_trait]
impl PathOpener for ExistenceOpener {
    async fn open_path(&self, path: &Path) -> io::Result<()> {
        let file = tokio::fs::File::open(path).await?;
        if file.metadata().await?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"));
        }
        Ok(())
    }
}

/// Opens a path by running an external command with the path appended.
///
/// ```
/// use hswap::fs::CommandOpener;
///
/// let opener = CommandOpener::parse("code --reuse-window").unwrap();
/// assert_eq!(opener.program(), "code");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    /// Run `program` with `args`, then the path.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a whitespace-separated command line. Returns `None` when blank.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// The program that is run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl PathOpener for CommandOpener {
    async fn open_path(&self, path: &Path) -> io::Result<()> {
        ExistenceOpener.open_path(path).await?;

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {status}", self.program)))
        }
    }
}
