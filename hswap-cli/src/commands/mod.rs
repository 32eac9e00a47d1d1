//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `swap`: Print (and optionally open) the counterpart of a file
//! - `session`: Answer swap requests from stdin for editor integrations
//! - `show_config`: Print the merged configuration
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod session;
pub mod show_config;
pub mod swap;
pub mod validate;

pub use completions::CompletionsCommand;
pub use session::SessionCommand;
pub use show_config::ShowConfigCommand;
pub use swap::SwapCommand;
pub use validate::ValidateCommand;
