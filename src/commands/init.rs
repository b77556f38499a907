//! Init command implementation
//!
//! Writes the default configuration so it can be edited.

use crate::cli::output::{print_output, Message};
use crate::cli::Cli;
use crate::config::{Config, ConfigFile};
use crate::error::{ConfigError, Result};

use std::path::Path;

/// Execute the init command
pub fn run_init(cli: &Cli, path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        return Err(ConfigError::InvalidValue {
            key: "path".to_string(),
            message: format!("{} already exists (use --force to overwrite)", path),
        }
        .into());
    }

    ConfigFile::save(&Config::default(), path)?;
    log::info!("Wrote default config to {}", path);

    let msg = Message {
        message: format!("Wrote default configuration to {}", path),
        success: true,
    };
    print_output(&msg, cli.format)?;

    Ok(())
}
