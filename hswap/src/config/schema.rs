//! Configuration schema definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Header extensions used when no configuration overrides them.
pub const DEFAULT_HEADER_EXTENSIONS: &[&str] = &[".h", ".hh", ".hpp", ".hxx", ".inl"];

/// Source extensions used when no configuration overrides them.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[".c", ".cc", ".cpp", ".cxx", ".c++", ".m", ".mm"];

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use hswap::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "header_extensions: ['.h']\nsource_extensions: ['.c']\ndisable_caching: true\n",
/// ).unwrap();
/// assert_eq!(config.header_extensions, Some(vec![".h".to_string()]));
/// assert_eq!(config.disable_caching, Some(true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extensions that mark a declaration ("header") file.
    pub header_extensions: Option<Vec<String>>,

    /// Extensions that mark an implementation ("source") file.
    pub source_extensions: Option<Vec<String>>,

    /// Turn off the pair cache entirely.
    pub disable_caching: Option<bool>,

    /// Limits for the workspace-wide search phase.
    pub workspace_search: Option<WorkspaceSearchConfig>,
}

impl Config {
    /// Built-in defaults, the lowest configuration layer.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            header_extensions: Some(to_strings(DEFAULT_HEADER_EXTENSIONS)),
            source_extensions: Some(to_strings(DEFAULT_SOURCE_EXTENSIONS)),
            disable_caching: Some(false),
            workspace_search: Some(WorkspaceSearchConfig::default()),
        }
    }

    /// Whether the pair cache is disabled. Absent means enabled.
    #[must_use]
    pub fn is_caching_disabled(&self) -> bool {
        self.disable_caching.unwrap_or(false)
    }

    /// The header/source split described by this configuration.
    ///
    /// Missing lists degrade to empty sets.
    #[must_use]
    pub fn classification(&self) -> ExtensionClassification {
        ExtensionClassification::new(
            self.header_extensions.clone().unwrap_or_default(),
            self.source_extensions.clone().unwrap_or_default(),
        )
    }

    /// Workspace search limits, falling back to defaults.
    #[must_use]
    pub fn workspace_search(&self) -> WorkspaceSearchConfig {
        self.workspace_search.clone().unwrap_or_default()
    }
}

/// Limits applied to the workspace-wide search.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSearchConfig {
    /// Stop collecting candidates after this many matches.
    #[serde(default = "WorkspaceSearchConfig::default_max_results")]
    pub max_results: usize,

    /// Give up on the search after this many seconds.
    #[serde(default = "WorkspaceSearchConfig::default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Skip files excluded by `.gitignore` and similar ignore files.
    #[serde(default = "WorkspaceSearchConfig::default_respect_ignore_files")]
    pub respect_ignore_files: bool,
}

impl WorkspaceSearchConfig {
    fn default_max_results() -> usize {
        1000
    }

    fn default_timeout_seconds() -> u64 {
        30
    }

    fn default_respect_ignore_files() -> bool {
        true
    }
}

impl Default for WorkspaceSearchConfig {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
            timeout_seconds: Self::default_timeout_seconds(),
            respect_ignore_files: Self::default_respect_ignore_files(),
        }
    }
}

/// The two disjoint extension sets that define what counts as a header and
/// what counts as a source file.
///
/// # Examples
///
/// ```
/// use hswap::ExtensionClassification;
///
/// let classes = ExtensionClassification::new(
///     vec![".h".into(), ".hpp".into()],
///     vec![".c".into(), ".cpp".into()],
/// );
/// assert!(classes.search_extensions_for(".h").contains(".cpp"));
/// assert!(classes.search_extensions_for(".cpp").contains(".hpp"));
/// // Anything that is not a header is treated as a source file.
/// assert!(classes.search_extensions_for(".txt").contains(".h"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionClassification {
    header_extensions: BTreeSet<String>,
    source_extensions: BTreeSet<String>,
}

impl ExtensionClassification {
    /// Build a classification from the two extension lists.
    pub fn new<H, S>(headers: H, sources: S) -> Self
    where
        H: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        Self {
            header_extensions: headers.into_iter().collect(),
            source_extensions: sources.into_iter().collect(),
        }
    }

    /// The header extensions.
    #[must_use]
    pub fn header_extensions(&self) -> &BTreeSet<String> {
        &self.header_extensions
    }

    /// The source extensions.
    #[must_use]
    pub fn source_extensions(&self) -> &BTreeSet<String> {
        &self.source_extensions
    }

    /// Whether `extension` (with its dot) is a header extension.
    #[must_use]
    pub fn is_header(&self, extension: &str) -> bool {
        self.header_extensions.contains(extension)
    }

    /// The set to search when swapping away from a file with `extension`.
    ///
    /// Headers look for sources; everything else looks for headers.
    #[must_use]
    pub fn search_extensions_for(&self, extension: &str) -> &BTreeSet<String> {
        if self.is_header(extension) {
            &self.source_extensions
        } else {
            &self.header_extensions
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
