//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, WorkspaceSearchConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z+]{1,4}".prop_map(|s| format!(".{s}"))
}

fn extension_list_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(extension_strategy(), 0..5))
}

fn search_strategy() -> impl Strategy<Value = Option<WorkspaceSearchConfig>> {
    prop::option::of((1usize..10_000, 1u64..600, any::<bool>()).prop_map(
        |(max_results, timeout_seconds, respect_ignore_files)| WorkspaceSearchConfig {
            max_results,
            timeout_seconds,
            respect_ignore_files,
        },
    ))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        extension_list_strategy(),
        extension_list_strategy(),
        prop::option::of(any::<bool>()),
        search_strategy(),
    )
        .prop_map(|(headers, sources, disable_caching, search)| Config {
            header_extensions: headers,
            source_extensions: sources,
            disable_caching,
            workspace_search: search,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer survives the merge unchanged
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.header_extensions,
            high.header_extensions.or(low.header_extensions)
        );
        prop_assert_eq!(
            merged.source_extensions,
            high.source_extensions.or(low.source_extensions)
        );
        prop_assert_eq!(merged.disable_caching, high.disable_caching.or(low.disable_caching));
        prop_assert_eq!(merged.workspace_search, high.workspace_search.or(low.workspace_search));
    }

    // Merging a config into itself is a no-op
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Well-formed extensions only fail validation when the sets overlap
    #[test]
    fn validation_fails_only_on_overlap(config in config_strategy()) {
        let overlap = match (&config.header_extensions, &config.source_extensions) {
            (Some(h), Some(s)) => s.iter().any(|ext| h.contains(ext)),
            _ => false,
        };
        prop_assert_eq!(ConfigValidator::validate(&config).is_err(), overlap);
    }
}
