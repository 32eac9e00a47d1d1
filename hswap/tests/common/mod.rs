//! Common test utilities for integration tests.
//!
//! In-memory collaborators that record every call, so tests can assert both
//! what the swap search returned and which phases it touched.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hswap::swap::{CandidateChooser, DirectoryLister, PathOpener, WorkspaceSearcher};
use hswap::{Error, ExtensionClassification, Result, SwapCandidate, SwapResolver, Swapper};
use tokio_util::sync::CancellationToken;

/// A collaborator call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Call {
    List(PathBuf),
    ListRecursive(PathBuf),
    Search(String),
    Open(PathBuf),
    Choose(Vec<PathBuf>),
}

/// Shared, ordered call log.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

#[allow(dead_code)]
impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    pub fn searches(&self) -> usize {
        self.count(|c| matches!(c, Call::Search(_)))
    }
}

/// How the fake workspace search behaves.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub enum SearchBehavior {
    #[default]
    Results,
    /// Never finishes unless cancelled.
    Hang,
    /// Sleeps before answering.
    Delay(Duration),
    Fail,
}

/// In-memory directory tree and workspace index.
#[derive(Debug, Default)]
pub struct FakeFs {
    dirs: HashMap<PathBuf, Vec<String>>,
    trees: HashMap<PathBuf, Vec<PathBuf>>,
    stuck_trees: HashSet<PathBuf>,
    workspace: Vec<PathBuf>,
    behavior: SearchBehavior,
    log: CallLog,
}

#[allow(dead_code)]
impl FakeFs {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            ..Self::default()
        }
    }

    pub fn with_dir(mut self, dir: &str, names: &[&str]) -> Self {
        self.dirs.insert(
            PathBuf::from(dir),
            names.iter().map(|n| (*n).to_string()).collect(),
        );
        self
    }

    pub fn with_tree(mut self, root: &str, files: &[&str]) -> Self {
        self.trees
            .insert(PathBuf::from(root), files.iter().map(PathBuf::from).collect());
        self
    }

    /// A recursive listing of `root` that never returns, even when cancelled.
    pub fn with_stuck_tree(mut self, root: &str) -> Self {
        self.stuck_trees.insert(PathBuf::from(root));
        self
    }

    pub fn with_workspace(mut self, files: &[&str]) -> Self {
        self.workspace = files.iter().map(PathBuf::from).collect();
        self
    }

    pub fn with_behavior(mut self, behavior: SearchBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

fn missing(path: &Path) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such directory: {}", path.display()),
    ))
}

#[async_trait]
impl DirectoryLister for FakeFs {
    async fn list_directory(&self, dir: &Path) -> Result<Vec<String>> {
        self.log.push(Call::List(dir.to_path_buf()));
        self.dirs.get(dir).cloned().ok_or_else(|| missing(dir))
    }

    async fn list_directory_recursive(
        &self,
        dir: &Path,
        _cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>> {
        self.log.push(Call::ListRecursive(dir.to_path_buf()));
        if self.stuck_trees.contains(dir) {
            std::future::pending::<()>().await;
        }
        self.trees.get(dir).cloned().ok_or_else(|| missing(dir))
    }
}

#[async_trait]
impl WorkspaceSearcher for FakeFs {
    async fn search_workspace(
        &self,
        stem: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>> {
        self.log.push(Call::Search(stem.to_string()));
        match &self.behavior {
            SearchBehavior::Results => {}
            SearchBehavior::Hang => {
                cancel.cancelled().await;
                return Err(Error::SearchCancelled);
            }
            SearchBehavior::Delay(delay) => {
                tokio::select! {
                    () = cancel.cancelled() => return Err(Error::SearchCancelled),
                    () = tokio::time::sleep(*delay) => {}
                }
            }
            SearchBehavior::Fail => {
                return Err(Error::SearchFailed {
                    root: PathBuf::from("/"),
                    reason: "index unavailable".into(),
                });
            }
        }
        Ok(self
            .workspace
            .iter()
            .filter(|p| p.file_stem().and_then(|s| s.to_str()) == Some(stem))
            .cloned()
            .collect())
    }
}

/// Opens only the paths it was told exist.
#[derive(Debug, Default)]
pub struct FakeOpener {
    openable: Mutex<HashSet<PathBuf>>,
    log: CallLog,
}

#[allow(dead_code)]
impl FakeOpener {
    pub fn new(log: &CallLog, openable: &[&str]) -> Self {
        Self {
            openable: Mutex::new(openable.iter().map(PathBuf::from).collect()),
            log: log.clone(),
        }
    }

    pub fn forget(&self, path: &str) {
        self.openable.lock().unwrap().remove(Path::new(path));
    }
}

#[async_trait]
impl PathOpener for FakeOpener {
    async fn open_path(&self, path: &Path) -> io::Result<()> {
        self.log.push(Call::Open(path.to_path_buf()));
        if self.openable.lock().unwrap().contains(path) {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }
}

/// Picks a fixed path, or abandons the choice.
#[derive(Debug)]
pub struct FakeChooser {
    pick: Option<PathBuf>,
    hang: bool,
    log: CallLog,
}

#[allow(dead_code)]
impl FakeChooser {
    pub fn picking(log: &CallLog, pick: Option<&str>) -> Self {
        Self {
            pick: pick.map(PathBuf::from),
            hang: false,
            log: log.clone(),
        }
    }

    /// Never answers.
    pub fn hanging(log: &CallLog) -> Self {
        Self {
            pick: None,
            hang: true,
            log: log.clone(),
        }
    }
}

#[async_trait]
impl CandidateChooser for FakeChooser {
    async fn choose(&self, candidates: &[SwapCandidate]) -> Option<PathBuf> {
        self.log.push(Call::Choose(
            candidates.iter().map(|c| c.full_path.clone()).collect(),
        ));
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.pick.clone()
    }
}

/// `.h`/`.hpp` headers against `.c`/`.cpp` sources.
#[allow(dead_code)]
pub fn c_classification() -> ExtensionClassification {
    ExtensionClassification::new(
        vec![".h".to_string(), ".hpp".to_string()],
        vec![".c".to_string(), ".cpp".to_string()],
    )
}

/// A resolver over `fs`.
#[allow(dead_code)]
pub fn resolver(fs: FakeFs) -> SwapResolver {
    let fs = Arc::new(fs);
    SwapResolver::new(fs.clone(), fs)
}

/// A swapper over `fs` and `opener` with the C classification.
#[allow(dead_code)]
pub fn swapper(fs: FakeFs, opener: FakeOpener) -> (Swapper, Arc<FakeOpener>) {
    let opener = Arc::new(opener);
    (
        Swapper::new(resolver(fs), c_classification(), opener.clone()),
        opener,
    )
}
