//! Configuration validation.

use crate::config::schema::{Config, WorkspaceSearchConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use hswap::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when an extension is malformed, when the
    /// header and source sets overlap, or when a search limit is zero.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref headers) = config.header_extensions {
            Self::validate_extensions("header_extensions", headers)?;
        }

        if let Some(ref sources) = config.source_extensions {
            Self::validate_extensions("source_extensions", sources)?;
        }

        if let (Some(headers), Some(sources)) =
            (&config.header_extensions, &config.source_extensions)
        {
            Self::validate_disjoint(headers, sources)?;
        }

        if let Some(ref search) = config.workspace_search {
            Self::validate_search(search)?;
        }

        Ok(())
    }

    /// Each extension must look like `.ext`: a leading dot, at least one more
    /// character, and no separators or whitespace.
    fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
        for (i, ext) in extensions.iter().enumerate() {
            let field = format!("{field}[{i}]");

            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(Error::Validation {
                    field,
                    message: format!("'{ext}' must start with '.' followed by the extension"),
                });
            }

            if ext[1..].contains('.') {
                return Err(Error::Validation {
                    field,
                    message: format!("'{ext}' must be a single extension"),
                });
            }

            if ext.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace()) {
                return Err(Error::Validation {
                    field,
                    message: format!("'{ext}' cannot contain separators or whitespace"),
                });
            }
        }

        Ok(())
    }

    fn validate_disjoint(headers: &[String], sources: &[String]) -> Result<()> {
        let headers: HashSet<&str> = headers.iter().map(String::as_str).collect();
        let mut overlap: Vec<&str> = sources
            .iter()
            .map(String::as_str)
            .filter(|ext| headers.contains(ext))
            .collect();

        if overlap.is_empty() {
            return Ok(());
        }

        overlap.sort_unstable();
        overlap.dedup();
        Err(Error::Validation {
            field: "source_extensions".into(),
            message: format!(
                "extensions listed as both header and source: {}",
                overlap.join(", ")
            ),
        })
    }

    fn validate_search(search: &WorkspaceSearchConfig) -> Result<()> {
        if search.max_results == 0 {
            return Err(Error::Validation {
                field: "workspace_search.max_results".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if search.timeout_seconds == 0 {
            return Err(Error::Validation {
                field: "workspace_search.timeout_seconds".into(),
                message: "Must be greater than 0".into(),
            });
        }

        Ok(())
    }
}
