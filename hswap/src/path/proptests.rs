//! Property-based tests for path handling.
//!
//! The normalize module already checks key idempotence. This module covers
//! the interplay between keys and file locations with a larger case count.

use super::normalize::{lexical_normalize, normalize_key};
use super::types::FileLocation;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,20}"
}

fn file_path_strategy() -> impl Strategy<Value = PathBuf> {
    (
        prop::collection::vec(path_component_strategy(), 1..8),
        "[a-zA-Z0-9_]{1,12}",
        "[a-z]{1,4}",
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut path = PathBuf::from("/");
            for dir in dirs {
                path.push(dir);
            }
            path.push(format!("{stem}.{ext}"));
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Splitting and reassembling a clean path is lossless
    #[test]
    fn file_location_reassembles(path in file_path_strategy()) {
        let loc = FileLocation::from_path(&path);
        prop_assert!(loc.has_extension());
        prop_assert_eq!(loc.full_path(), path);
    }

    // A redundant "./" or "x/.." detour never changes the key
    #[test]
    fn key_ignores_detours(path in file_path_strategy(), detour in path_component_strategy()) {
        let loc = FileLocation::from_path(&path);
        let file_name = path.file_name().unwrap().to_owned();
        let detoured = loc.directory().join(".").join(&detour).join("..").join(file_name);
        prop_assert_eq!(normalize_key(&detoured), normalize_key(&path));
    }

    // Clean absolute paths are fixed points of lexical normalization
    #[test]
    fn clean_paths_unchanged(path in file_path_strategy()) {
        prop_assert_eq!(lexical_normalize(&path), path.clone());
        prop_assert_eq!(normalize_key(Path::new(&normalize_key(&path))), normalize_key(&path));
    }
}
