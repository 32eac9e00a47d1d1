//! Command to validate an hswap configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use hswap::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate an hswap configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path)
            .map_err(|e| CliError::Config(e.to_string()))?;

        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        println!("Configuration is valid");
        Ok(())
    }
}
