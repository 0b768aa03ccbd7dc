//! Command-line command handlers for monitorctl.
//!
//! This module contains implementations for the one-shot CLI commands.
//! Each command is implemented in its own submodule and follows the same
//! shape: print the version header, load configuration, talk to the display
//! tools, close the log block.

pub mod brightness;
pub mod profile;
pub mod status;
pub mod toggle;

use anyhow::Result;

use crate::config::Config;

/// Shared startup for every subcommand.
///
/// Prints the version header, loads (creating if necessary) the configuration,
/// and echoes the loaded settings when debug output is requested.
pub(crate) fn load_environment(debug_enabled: bool) -> Result<Config> {
    log_version!();
    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }
    Ok(config)
}
