//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hswap::config::{Config, ConfigMerger};
///
/// let low = Config { disable_caching: Some(false), ..Default::default() };
/// let high = Config { disable_caching: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.disable_caching, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Extension lists: replaced wholesale, never unioned, so a project can
    ///   narrow the defaults
    /// - Simple fields: source overwrites if Some
    /// - Workspace search: a present section replaces the target section
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.header_extensions.is_some() {
            target.header_extensions.clone_from(&source.header_extensions);
        }

        if source.source_extensions.is_some() {
            target.source_extensions.clone_from(&source.source_extensions);
        }

        if source.disable_caching.is_some() {
            target.disable_caching = source.disable_caching;
        }

        // Missing keys inside the section were already filled by serde defaults.
        if source.workspace_search.is_some() {
            target.workspace_search.clone_from(&source.workspace_search);
        }
    }
}
