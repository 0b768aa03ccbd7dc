//! Configuration system for monitorctl.
//!
//! Settings live in a TOML file, `monitorctl.toml`, under the platform config
//! directory (`~/.config/monitorctl/` on Linux) or under the directory given
//! with `--config`. A default file is generated on first run.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Schedule]
//! schedule = "home"        # Named schedule variant: "home" or "work"
//!
//! # Optional overrides for the active variant:
//! # day_start = 4.5        # Hour the day period begins, exclusive (0-24)
//! # day_end = 15.0         # Hour the evening decay begins (0-24)
//! # evening_end = 19.5     # Hour the night floor takes over (0-24)
//! # evening_floor = 0.25   # Lowest brightness of the evening decay (0.1-1.0)
//! # night_floor = 0.15     # Brightness held during the night (0.1-1.0)
//!
//! #[External tools]
//! display = ":0"           # X display xrandr should target
//! command_timeout = 10     # Seconds to wait for xrandr/ddcutil (1-120)
//! device_delay_ms = 500    # Pause between devices in batch operations (0-10000)
//!
//! #[Profile aliases]
//! [profile_aliases]
//! alice = "home"           # `monitorctl profile` run by alice applies "home"
//!
//! #[Monitors]
//! [[monitor]]
//! model = "DELL S2721DS"
//! vcp = "0x60"
//! inputs = { HDMI_1 = "0x11", HDMI_2 = "0x12" }
//! profiles = { home = "HDMI_1", work = "HDMI_2" }
//! ```
//!
//! ## Validation
//!
//! Loading validates hour ordering (`day_start < day_end < evening_end`),
//! brightness floors, timeout and delay ranges, and every `[[monitor]]`
//! declaration (exactly two inputs, unique codes, profile targets that
//! reference declared inputs). An invalid file never produces a partially
//! usable `Config`.

pub mod builder;
pub mod loading;
pub mod validation;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_DEVICE_DELAY_MS, DEFAULT_DISPLAY, DEFAULT_INPUT_VCP,
};
use crate::registry::{ModelRegistry, MonitorEntry};
use crate::schedule::ScheduleParams;

// Re-export public API
pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path, set_config_dir};

/// Named schedule variant selecting a base parameter set.
///
/// The variant provides the base values; any explicit hour or floor field in
/// the config overrides the corresponding variant value.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleVariant {
    /// Evening ends at 19:30 with dim floors, tuned for a dark room.
    Home,
    /// Evening ends at 20:00 with brighter floors, tuned for a lit office.
    Work,
}

impl ScheduleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleVariant::Home => "home",
            ScheduleVariant::Work => "work",
        }
    }

    /// Base schedule parameters for this variant.
    pub fn params(&self) -> ScheduleParams {
        match self {
            ScheduleVariant::Home => ScheduleParams::home(),
            ScheduleVariant::Work => ScheduleParams::work(),
        }
    }
}

/// One `[[monitor]]` block: a model's input wiring as written in the config.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Model string exactly as ddcutil reports it.
    pub model: String,
    /// Input-select VCP feature code, defaults to 0x60.
    pub vcp: Option<String>,
    /// Input name to VCP value code.
    pub inputs: BTreeMap<String, String>,
    /// Profile name to input name.
    pub profiles: Option<BTreeMap<String, String>>,
}

impl MonitorConfig {
    fn to_entry(&self) -> MonitorEntry {
        MonitorEntry {
            model: self.model.clone(),
            vcp: self
                .vcp
                .clone()
                .unwrap_or_else(|| DEFAULT_INPUT_VCP.to_string()),
            inputs: self
                .inputs
                .iter()
                .map(|(name, code)| (name.clone(), code.clone()))
                .collect(),
            profiles: self
                .profiles
                .iter()
                .flatten()
                .map(|(profile, input)| (profile.clone(), input.clone()))
                .collect(),
        }
    }
}

/// Application settings loaded from `monitorctl.toml`.
///
/// Every field is optional in the file; [`loading::load_from_path`] fills in
/// defaults after validation, and the accessor methods fall back to the same
/// defaults so a hand-built `Config` behaves identically.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Named schedule variant, defaults to `home`.
    pub schedule: Option<ScheduleVariant>,
    /// Override: hour the day period begins (exclusive).
    pub day_start: Option<f64>,
    /// Override: hour the evening decay begins.
    pub day_end: Option<f64>,
    /// Override: hour the night floor takes over.
    pub evening_end: Option<f64>,
    /// Override: lowest brightness of the evening decay.
    pub evening_floor: Option<f64>,
    /// Override: brightness held during the night.
    pub night_floor: Option<f64>,

    /// X display passed to xrandr through the DISPLAY environment variable.
    pub display: Option<String>,
    /// Seconds each external command may run before it is killed.
    pub command_timeout: Option<u64>,
    /// Milliseconds to pause between devices in batch operations.
    pub device_delay_ms: Option<u64>,

    /// Login name to profile name, used when no profile is given explicitly.
    pub profile_aliases: Option<BTreeMap<String, String>>,
    /// Monitor declarations extending or overriding the built-in set.
    pub monitor: Option<Vec<MonitorConfig>>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load from path using the module's load_from_path function
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        load_from_path(path)
    }

    /// Get configuration path using the module's get_config_path function
    pub fn get_config_path() -> Result<PathBuf> {
        get_config_path()
    }

    /// Effective schedule parameters: the named variant's base values with
    /// any explicit field overrides applied on top.
    pub fn schedule_params(&self) -> ScheduleParams {
        let mut params = self.schedule.unwrap_or(ScheduleVariant::Home).params();
        if let Some(day_start) = self.day_start {
            params.day_start = day_start;
        }
        if let Some(day_end) = self.day_end {
            params.day_end = day_end;
        }
        if let Some(evening_end) = self.evening_end {
            params.evening_end = evening_end;
        }
        if let Some(evening_floor) = self.evening_floor {
            params.evening_floor = evening_floor;
        }
        if let Some(night_floor) = self.night_floor {
            params.night_floor = night_floor;
        }
        params
    }

    /// X display xrandr should target.
    pub fn display_target(&self) -> &str {
        self.display.as_deref().unwrap_or(DEFAULT_DISPLAY)
    }

    /// Timeout applied to every external command invocation.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout.unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS))
    }

    /// Pause inserted between devices in batch operations.
    pub fn device_delay(&self) -> Duration {
        Duration::from_millis(self.device_delay_ms.unwrap_or(DEFAULT_DEVICE_DELAY_MS))
    }

    /// Builds the model registry: built-in models first, then `[[monitor]]`
    /// blocks, so a config block for a built-in model replaces it.
    pub fn model_registry(&self) -> Result<ModelRegistry> {
        let mut entries = ModelRegistry::builtin_entries();
        for monitor in self.monitor.iter().flatten() {
            entries.push(monitor.to_entry());
        }
        ModelRegistry::from_entries(entries)
    }

    /// Resolves a requested profile name through the alias table.
    ///
    /// Both the request and alias keys are compared case-insensitively; the
    /// result is always lowercase because profile lookups are.
    pub fn resolve_profile(&self, requested: &str) -> String {
        let name = requested.trim().to_lowercase();
        if let Some(aliases) = &self.profile_aliases {
            if let Some((_, target)) = aliases
                .iter()
                .find(|(key, _)| key.trim().to_lowercase() == name)
            {
                return target.trim().to_lowercase();
            }
        }
        name
    }

    /// Logs the loaded configuration in the standard block format.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        let variant = self.schedule.unwrap_or(ScheduleVariant::Home);
        let params = self.schedule_params();
        log_indented!(
            "Schedule: {} (day {}-{}, evening until {})",
            variant.as_str(),
            params.day_start,
            params.day_end,
            params.evening_end
        );
        log_indented!(
            "Floors: evening {}, night {}",
            params.evening_floor,
            params.night_floor
        );
        log_indented!("Display: {}", self.display_target());
        log_indented!("Command timeout: {}s", self.command_timeout().as_secs());
        if let Ok(registry) = self.model_registry() {
            log_indented!("Known monitor models: {}", registry.len());
        }
    }
}

#[cfg(test)]
mod tests;
