//! Layered configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from defaults, files, environment,
/// and programmatic overrides.
///
/// # Examples
///
/// ```
/// use hswap::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         source_extensions: Some(vec![".cc".to_string()]),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.source_extensions, Some(vec![".cc".to_string()]));
/// assert!(config.header_extensions.is_some());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that loads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir/config.yaml` instead of `~/.hswap`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: Option<&Path>) -> Self {
        self.config_dir = dir.map(Path::to_path_buf);
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `HSWAP_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic override layer (highest precedence).
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge, and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged result is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = vec![ConfigSource {
            path: PathBuf::from("<defaults>"),
            precedence: 0,
            config: Config::defaults(),
        }];

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            for source in ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())? {
                log::debug!("Loaded configuration from {}", source.path.display());
                ConfigValidator::validate(&source.config)?;
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::defaults());
    }

    #[test]
    fn test_project_file_layered_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let empty_config_dir = temp_dir.path().join("no-user-config");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "header_extensions: ['.hh']\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_dir(Some(&empty_config_dir))
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.header_extensions, Some(vec![".hh".to_string()]));
        assert_eq!(
            config.source_extensions,
            Config::defaults().source_extensions
        );
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "header_extensions: ['h']\n",
        )
        .unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_dir(Some(temp_dir.path()))
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_override_creating_overlap_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                source_extensions: Some(vec![".h".to_string()]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
