//! Configuration loading and path resolution.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};

use super::validation::validate_config;
use super::{Config, ScheduleVariant};
use crate::constants::{DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_DEVICE_DELAY_MS, DEFAULT_DISPLAY};
use crate::utils::private_path;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
/// Returns an error if already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    #[cfg(debug_assertions)]
    eprintln!("DEBUG: set_config_dir() called with: {dir:?}");

    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
/// Returns None if using the default directory.
fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Get the base configuration directory containing monitorctl.toml.
pub fn get_config_base_dir() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir);
    }
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("monitorctl"))
}

/// Get the configuration file path.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_base_dir()?.join("monitorctl.toml"))
}

/// Load configuration using automatic path detection.
///
/// Creates a default configuration file if none exists yet.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
        log_block_start!(
            "Created default config file: {}",
            private_path(&config_path)
        );
    }

    load_from_path(&config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            private_path(&config_path)
        )
    })
}

/// Load configuration from a specific path.
///
/// This version does NOT create a default config if the path doesn't exist.
pub fn load_from_path(path: &PathBuf) -> Result<Config> {
    if !path.exists() {
        log_pipe!();
        log_critical!("Configuration file not found at specified path:");
        log_indented!("{}", private_path(path));
        log_end!();
        std::process::exit(crate::constants::EXIT_FAILURE);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", private_path(path)))?;

    // Validation works on the effective values, so it runs before defaults
    // are written back into the struct
    validate_config(&config)?;

    apply_defaults(&mut config);

    Ok(config)
}

/// Fills in defaults for settings the file leaves unset.
///
/// Schedule override fields deliberately stay `None`: writing variant values
/// into them would pin the curve to the variant active at load time.
fn apply_defaults(config: &mut Config) {
    if config.schedule.is_none() {
        config.schedule = Some(ScheduleVariant::Home);
    }
    if config.display.is_none() {
        config.display = Some(DEFAULT_DISPLAY.to_string());
    }
    if config.command_timeout.is_none() {
        config.command_timeout = Some(DEFAULT_COMMAND_TIMEOUT_SECS);
    }
    if config.device_delay_ms.is_none() {
        config.device_delay_ms = Some(DEFAULT_DEVICE_DELAY_MS);
    }
}
