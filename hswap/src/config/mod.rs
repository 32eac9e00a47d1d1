//! Configuration system for hswap.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `hswap.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HSWAP_*`)
//! 3. Private project config (`hswap.local.yaml`)
//! 4. Project config (`hswap.yaml`)
//! 5. User config (`~/.hswap/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hswap::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let classes = config.classification();
//! println!("headers: {:?}", classes.header_extensions());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{
    Config, ExtensionClassification, WorkspaceSearchConfig, DEFAULT_HEADER_EXTENSIONS,
    DEFAULT_SOURCE_EXTENSIONS,
};
pub use validator::ConfigValidator;
