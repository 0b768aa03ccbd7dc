//! Configuration validation functionality.
//!
//! Validates the effective settings a config resolves to, so a variant plus
//! overrides is checked as the curve that will actually run. Monitor blocks
//! are validated by constructing the registry they produce.

use anyhow::{Context, Result, bail};

use super::Config;
use crate::constants::{
    MAXIMUM_BRIGHTNESS, MAXIMUM_COMMAND_TIMEOUT_SECS, MAXIMUM_DEVICE_DELAY_MS,
    MAXIMUM_SCHEDULE_HOUR, MINIMUM_BRIGHTNESS, MINIMUM_COMMAND_TIMEOUT_SECS,
    MINIMUM_SCHEDULE_HOUR,
};

pub fn validate_config(config: &Config) -> Result<()> {
    let params = config.schedule_params();

    for (name, value) in [
        ("day_start", params.day_start),
        ("day_end", params.day_end),
        ("evening_end", params.evening_end),
    ] {
        if !(MINIMUM_SCHEDULE_HOUR..=MAXIMUM_SCHEDULE_HOUR).contains(&value) {
            bail!(
                "{} must be between {} and {} hours, got {}",
                name,
                MINIMUM_SCHEDULE_HOUR,
                MAXIMUM_SCHEDULE_HOUR,
                value
            );
        }
    }

    if !(params.day_start < params.day_end && params.day_end < params.evening_end) {
        bail!(
            "schedule hours must satisfy day_start < day_end < evening_end, got {}, {} and {}",
            params.day_start,
            params.day_end,
            params.evening_end
        );
    }

    for (name, value) in [
        ("evening_floor", params.evening_floor),
        ("night_floor", params.night_floor),
    ] {
        if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&value) {
            bail!(
                "{name} must be between {MINIMUM_BRIGHTNESS} and {MAXIMUM_BRIGHTNESS}, got {value}"
            );
        }
    }

    if let Some(timeout) = config.command_timeout {
        if !(MINIMUM_COMMAND_TIMEOUT_SECS..=MAXIMUM_COMMAND_TIMEOUT_SECS).contains(&timeout) {
            bail!(
                "command_timeout must be between {MINIMUM_COMMAND_TIMEOUT_SECS} and {MAXIMUM_COMMAND_TIMEOUT_SECS} seconds, got {timeout}"
            );
        }
    }

    if let Some(delay) = config.device_delay_ms {
        if delay > MAXIMUM_DEVICE_DELAY_MS {
            bail!("device_delay_ms must be at most {MAXIMUM_DEVICE_DELAY_MS}, got {delay}");
        }
    }

    if let Some(display) = &config.display {
        if display.trim().is_empty() {
            bail!("display cannot be empty");
        }
    }

    // Surfaces duplicate inputs, bad VCP codes, and dangling profile targets
    config
        .model_registry()
        .context("invalid [[monitor]] configuration")?;

    Ok(())
}
