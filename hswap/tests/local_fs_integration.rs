//! End-to-end swaps against a real directory tree.
//!
//! Uses the disk-backed collaborators from `hswap::fs` over a temporary
//! project laid out the way C projects usually are.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hswap::fs::{ExistenceOpener, LocalFileSystem};
use hswap::swap::FirstChooser;
use hswap::workspace::find_workspace_root;
use hswap::{Config, SwapOutcome, SwapResolver, Swapper};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();
    path
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    touch(temp.path(), "net/include/net/socket.h");
    touch(temp.path(), "net/src/socket.cpp");
    touch(temp.path(), "util/strings.h");
    touch(temp.path(), "util/strings.c");
    touch(temp.path(), "app/main.c");
    touch(temp.path(), "tools/config.h");
    touch(temp.path(), "lib/a/config.c");
    touch(temp.path(), "lib/b/config.c");
    temp
}

fn swapper_for(root: &Path) -> Swapper {
    let config = Config::defaults();
    let fs = Arc::new(LocalFileSystem::new(root, &config.workspace_search()));
    let resolver = SwapResolver::new(fs.clone(), fs);
    Swapper::new(resolver, config.classification(), Arc::new(ExistenceOpener))
}

#[tokio::test]
async fn test_sibling_on_disk() {
    let temp = project();
    let mut swapper = swapper_for(temp.path());

    let outcome = swapper
        .swap(&temp.path().join("util/strings.h"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SwapOutcome::Opened {
            path: temp.path().join("util/strings.c"),
            from_cache: false,
        }
    );
}

#[tokio::test]
async fn test_include_src_layout_on_disk() {
    let temp = project();
    let mut swapper = swapper_for(temp.path());
    let cancel = CancellationToken::new();

    let header = temp.path().join("net/include/net/socket.h");
    let outcome = swapper.swap(&header, &cancel).await.unwrap();
    assert_eq!(
        outcome,
        SwapOutcome::Opened {
            path: temp.path().join("net/src/socket.cpp"),
            from_cache: false,
        }
    );

    let back = swapper
        .swap(&temp.path().join("net/src/socket.cpp"), &cancel)
        .await
        .unwrap();
    assert_eq!(
        back,
        SwapOutcome::Opened {
            path: header,
            from_cache: true,
        }
    );
}

#[tokio::test]
async fn test_workspace_ambiguity_on_disk() {
    let temp = project();
    let root = find_workspace_root(&temp.path().join("tools"));
    assert_eq!(root, temp.path());

    let mut swapper = swapper_for(&root);
    let outcome = swapper
        .swap(&temp.path().join("tools/config.h"), &CancellationToken::new())
        .await
        .unwrap();

    let SwapOutcome::Ambiguous(candidates) = outcome else {
        panic!("expected ambiguity, got {outcome:?}");
    };
    let paths: Vec<_> = candidates.into_iter().map(|c| c.full_path).collect();
    assert_eq!(
        paths,
        vec![
            temp.path().join("lib/a/config.c"),
            temp.path().join("lib/b/config.c"),
        ]
    );
}

#[tokio::test]
async fn test_stale_counterpart_is_replaced() {
    let temp = project();
    let mut swapper = swapper_for(temp.path()).with_chooser(Arc::new(FirstChooser));
    let cancel = CancellationToken::new();
    let header = temp.path().join("util/strings.h");

    swapper.swap(&header, &cancel).await.unwrap();
    fs::remove_file(temp.path().join("util/strings.c")).unwrap();
    let moved = touch(temp.path(), "util/strings.cc");

    let outcome = swapper.swap(&header, &cancel).await.unwrap();
    assert_eq!(
        outcome,
        SwapOutcome::Opened {
            path: moved,
            from_cache: false,
        }
    );
}

#[tokio::test]
async fn test_lonely_source_not_found() {
    let temp = project();
    let mut swapper = swapper_for(temp.path());

    let outcome = swapper
        .swap(&temp.path().join("app/main.c"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, SwapOutcome::NotFound);
    assert!(swapper.cache().is_empty());
}
