//! ddcutil display detection and input-source control.
//!
//! Detection runs `ddcutil detect` and pairs each `Model:` line with the
//! `I2C bus:` line reported alongside it. For every model the registry
//! knows, the currently selected input is read with `getvcp`; a display
//! answering `Invalid response` is powered off and carries no source.
//! Switching inputs writes the target VCP value with `setvcp --bus`.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use anyhow::{Result, bail};
use regex::Regex;

use crate::config::Config;
use crate::constants::DDCUTIL_COMMAND;
use crate::registry::{InputSource, ModelRegistry, MonitorSpec};

use super::resolve_tool;
use super::runner::CommandRunner;

/// Marker ddcutil prints when a monitor is powered off or asleep.
const INVALID_RESPONSE: &str = "Invalid response";

/// A DDC-addressable display found during detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    /// Model string exactly as reported by the EDID synopsis.
    pub model: String,
    /// I2C bus number used to address this display.
    pub bus: u8,
    /// Currently selected input code, `None` when the display is off or the
    /// query could not be read.
    pub current_source: Option<String>,
}

/// What a `getvcp` response told us about the selected input.
#[derive(Debug, Clone, PartialEq)]
enum SourceReading {
    Selected(String),
    Off,
    Unreadable,
}

/// Drives input-source selection through the ddcutil CLI.
pub struct DdcBackend {
    ddcutil: PathBuf,
    runner: CommandRunner,
}

impl DdcBackend {
    /// Resolves the ddcutil executable.
    pub fn new(config: &Config, debug_enabled: bool) -> Result<Self> {
        Ok(Self {
            ddcutil: resolve_tool(DDCUTIL_COMMAND)?,
            runner: CommandRunner::new(config.command_timeout(), debug_enabled),
        })
    }

    /// Detects attached displays and reads each one's selected input.
    ///
    /// Models the registry does not know are skipped with a warning; a
    /// failed source query degrades that display to "no source" rather than
    /// aborting the batch. Only a failed `detect` itself is an error.
    pub fn detect_displays(&self, registry: &ModelRegistry) -> Result<Vec<Display>> {
        let mut command = Command::new(&self.ddcutil);
        command.arg("detect");
        let output = self.runner.run(command)?;
        if !output.success {
            bail!("ddcutil detect failed: {}", output.error_text());
        }

        let mut displays = Vec::new();
        for (model, bus) in parse_detect_output(&output.stdout) {
            let Some(spec) = registry.get(&model) else {
                log_warning!("No configuration for model '{model}' (bus {bus}), skipping");
                continue;
            };
            let current_source = self.query_current_source(spec, bus);
            displays.push(Display {
                model,
                bus,
                current_source,
            });
        }
        Ok(displays)
    }

    /// Reads the currently selected input code of one display.
    ///
    /// Any failure becomes `None`: a powered-off display is expected to
    /// answer `Invalid response`, and harder failures are logged here so
    /// batch operations can keep going.
    fn query_current_source(&self, spec: &MonitorSpec, bus: u8) -> Option<String> {
        let mut command = Command::new(&self.ddcutil);
        command.args(["--bus", &bus.to_string(), "getvcp", spec.vcp()]);
        let output = match self.runner.run(command) {
            Ok(output) => output,
            Err(e) => {
                log_warning!(
                    "Could not read input source of {} (bus {}): {}",
                    spec.model(),
                    bus,
                    e
                );
                return None;
            }
        };
        match interpret_vcp_response(&output.combined()) {
            SourceReading::Selected(code) => Some(code),
            SourceReading::Off => None,
            SourceReading::Unreadable => {
                if !output.success {
                    log_warning!(
                        "ddcutil getvcp failed for {} (bus {}): {}",
                        spec.model(),
                        bus,
                        output.error_text()
                    );
                }
                None
            }
        }
    }

    /// Writes the input-select VCP value that switches a display to `target`.
    pub fn set_input_source(
        &self,
        display: &Display,
        spec: &MonitorSpec,
        target: &InputSource,
    ) -> Result<()> {
        let mut command = Command::new(&self.ddcutil);
        command.args([
            "setvcp",
            "--bus",
            &display.bus.to_string(),
            spec.vcp(),
            &target.code,
        ]);
        let output = self.runner.run(command)?;
        if !output.success {
            bail!(
                "ddcutil setvcp failed for {} (bus {}): {}",
                display.model,
                display.bus,
                output.error_text()
            );
        }
        Ok(())
    }
}

fn model_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Model:(.*)").unwrap())
}

fn bus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"I2C bus:.*?i2c-(\d+)").unwrap())
}

fn sl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"sl=(.*)\)").unwrap())
}

/// Pairs the nth `Model:` line with the nth `I2C bus:` line of a
/// `ddcutil detect` report.
///
/// Pairing is positional, so a blank model still consumes its bus before
/// the pair is dropped. Extra buses without a model are ignored by the zip.
fn parse_detect_output(text: &str) -> Vec<(String, u8)> {
    let models: Vec<&str> = model_re()
        .captures_iter(text)
        .map(|captures| captures.get(1).map_or("", |m| m.as_str()).trim())
        .collect();
    let buses: Vec<&str> = bus_re()
        .captures_iter(text)
        .map(|captures| captures.get(1).map_or("", |m| m.as_str()))
        .collect();
    models
        .into_iter()
        .zip(buses)
        .filter(|(model, _)| !model.is_empty())
        .filter_map(|(model, bus)| bus.parse::<u8>().ok().map(|bus| (model.to_string(), bus)))
        .collect()
}

/// Pulls the selected input code out of a `getvcp` response, lowercased.
fn extract_selected_code(text: &str) -> Option<String> {
    let captures = sl_re().captures(text)?;
    let code = captures.get(1).map_or("", |m| m.as_str()).trim().to_lowercase();
    if code.is_empty() { None } else { Some(code) }
}

fn interpret_vcp_response(text: &str) -> SourceReading {
    if text.contains(INVALID_RESPONSE) {
        return SourceReading::Off;
    }
    match extract_selected_code(text) {
        Some(code) => SourceReading::Selected(code),
        None => SourceReading::Unreadable,
    }
}
