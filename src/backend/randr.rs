//! xrandr output enumeration and brightness control.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::constants::{MAXIMUM_BRIGHTNESS, MINIMUM_BRIGHTNESS, XRANDR_COMMAND};

use super::resolve_tool;
use super::runner::CommandRunner;

/// A connected output as reported by xrandr.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDevice {
    pub name: String,
}

/// Drives software brightness through `xrandr --brightness`.
pub struct RandrBackend {
    xrandr: PathBuf,
    display: String,
    runner: CommandRunner,
}

impl RandrBackend {
    /// Resolves the xrandr executable and captures the settings it runs with.
    pub fn new(config: &Config, debug_enabled: bool) -> Result<Self> {
        Ok(Self {
            xrandr: resolve_tool(XRANDR_COMMAND)?,
            display: config.display_target().to_string(),
            runner: CommandRunner::new(config.command_timeout(), debug_enabled),
        })
    }

    /// Lists outputs whose xrandr status line reports them as connected.
    pub fn list_outputs(&self) -> Result<Vec<OutputDevice>> {
        let mut command = Command::new(&self.xrandr);
        command.env("DISPLAY", &self.display);
        let output = self.runner.run(command)?;
        if !output.success {
            bail!("xrandr query failed: {}", output.error_text());
        }
        Ok(parse_connected_outputs(&output.stdout))
    }

    /// Applies a brightness multiplier to one output.
    ///
    /// The value is validated before anything external runs, then rounded to
    /// three decimals so xrandr sees a tidy argument.
    pub fn set_brightness(&self, device: &OutputDevice, value: f64) -> Result<()> {
        validate_brightness(value)?;
        let rounded = round_brightness(value);
        let mut command = Command::new(&self.xrandr);
        command.env("DISPLAY", &self.display).args([
            "--output",
            &device.name,
            "--brightness",
            &rounded.to_string(),
        ]);
        let output = self.runner.run(command)?;
        if !output.success {
            bail!(
                "xrandr failed to set brightness {} on {}: {}",
                rounded,
                device.name,
                output.error_text()
            );
        }
        Ok(())
    }
}

/// Rejects brightness values outside the supported range.
pub fn validate_brightness(value: f64) -> Result<()> {
    if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&value) {
        bail!(
            "brightness must be between {MINIMUM_BRIGHTNESS} and {MAXIMUM_BRIGHTNESS}, got {value}"
        );
    }
    Ok(())
}

/// Rounds a brightness value to three decimal places.
pub fn round_brightness(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Extracts connected output names from an xrandr query.
///
/// A line names a connected output when it contains the token ` connected`;
/// the leading space keeps `disconnected` lines out. The output name is the
/// first whitespace-delimited token of its line. Order is preserved and
/// nothing is deduplicated.
fn parse_connected_outputs(text: &str) -> Vec<OutputDevice> {
    text.lines()
        .filter(|line| line.contains(" connected"))
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| OutputDevice {
            name: name.to_string(),
        })
        .collect()
}
