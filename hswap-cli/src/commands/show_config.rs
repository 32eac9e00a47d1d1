//! Command to print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use std::env;

/// Serialization used by `show-config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Print the merged configuration for the current directory.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub format: ConfigFormat,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = env::current_dir()?;
        let config = load_configuration(global, &cwd)?;

        let rendered = match self.format {
            ConfigFormat::Yaml => {
                serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?
            }
            ConfigFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::Config(e.to_string()))?,
        };

        println!("{}", rendered.trim_end());
        Ok(())
    }
}
