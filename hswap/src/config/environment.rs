//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HSWAP_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `HSWAP_HEADER_EXTENSIONS` | `header_extensions` (comma-separated) |
/// | `HSWAP_SOURCE_EXTENSIONS` | `source_extensions` (comma-separated) |
/// | `HSWAP_DISABLE_CACHING` | `disable_caching` |
/// | `HSWAP_MAX_RESULTS` | `workspace_search.max_results` |
/// | `HSWAP_SEARCH_TIMEOUT` | `workspace_search.timeout_seconds` |
///
/// # Examples
///
/// ```no_run
/// use hswap::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric limit, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("HSWAP_HEADER_EXTENSIONS") {
            config.header_extensions = Some(Self::parse_extension_list(&val));
        }

        if let Ok(val) = env::var("HSWAP_SOURCE_EXTENSIONS") {
            config.source_extensions = Some(Self::parse_extension_list(&val));
        }

        if let Ok(val) = env::var("HSWAP_DISABLE_CACHING") {
            config.disable_caching = Some(Self::parse_bool("HSWAP_DISABLE_CACHING", &val)?);
        }

        Self::apply_search_overrides(config)
    }

    fn apply_search_overrides(config: &mut Config) -> Result<()> {
        let mut search = config.workspace_search();
        let mut modified = false;

        if let Ok(val) = env::var("HSWAP_MAX_RESULTS") {
            search.max_results = val.trim().parse().map_err(|_| Error::Validation {
                field: "HSWAP_MAX_RESULTS".into(),
                message: "Must be a positive integer".into(),
            })?;
            modified = true;
        }

        if let Ok(val) = env::var("HSWAP_SEARCH_TIMEOUT") {
            search.timeout_seconds = val.trim().parse().map_err(|_| Error::Validation {
                field: "HSWAP_SEARCH_TIMEOUT".into(),
                message: "Must be a positive integer (seconds)".into(),
            })?;
            modified = true;
        }

        if modified {
            config.workspace_search = Some(search);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse a comma-separated extension list.
    ///
    /// Blank items are skipped. A missing leading dot is added, so `h,hpp`
    /// and `.h,.hpp` mean the same thing.
    fn parse_extension_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                if part.starts_with('.') {
                    part.to_string()
                } else {
                    format!(".{part}")
                }
            })
            .collect()
    }
}
