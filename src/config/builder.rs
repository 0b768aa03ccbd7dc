//! Configuration file building and default config creation.
//!
//! Handles creating the default configuration file and the builder pattern
//! that keeps generated comments aligned as constants change.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::constants::*;
use crate::registry::{ModelRegistry, MonitorEntry};
use crate::utils::login_name;

/// Create a default config file at the given path.
///
/// The generated file selects the `home` schedule variant, documents the
/// override fields as comments, declares the built-in monitors so users have
/// blocks to copy from, and maps the current login name to the `home`
/// profile when a login name can be determined.
pub fn create_default_config(path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let builder = ConfigBuilder::new()
        .add_section("Schedule")
        .add_setting(
            "schedule",
            "\"home\"",
            "Named schedule variant: \"home\" or \"work\"",
        )
        .add_raw(schedule_override_comments())
        .add_section("External tools")
        .add_setting(
            "display",
            &format!("\"{DEFAULT_DISPLAY}\""),
            "X display xrandr should target",
        )
        .add_setting(
            "command_timeout",
            &DEFAULT_COMMAND_TIMEOUT_SECS.to_string(),
            &format!(
                "Seconds to wait for xrandr/ddcutil ({MINIMUM_COMMAND_TIMEOUT_SECS}-{MAXIMUM_COMMAND_TIMEOUT_SECS})"
            ),
        )
        .add_setting(
            "device_delay_ms",
            &DEFAULT_DEVICE_DELAY_MS.to_string(),
            &format!("Pause between devices in batch operations (0-{MAXIMUM_DEVICE_DELAY_MS})"),
        );

    // The alias block only makes sense when we know who is logging in
    let builder = match login_name() {
        Ok(login) => builder.add_section("Profile aliases").add_raw(&format!(
            "# Login names resolve through this table when `monitorctl profile`\n\
             # is run without an argument\n\
             [profile_aliases]\n\
             {} = \"home\"",
            toml_key(&login)
        )),
        Err(_) => builder,
    };

    let mut builder = builder.add_section("Monitors").add_raw(
        "# Each monitor declares its input-select VCP feature, the two cabled\n\
         # inputs, and the input each profile assigns",
    );
    for entry in ModelRegistry::builtin_entries() {
        builder = builder.add_raw(&monitor_block(&entry));
    }

    fs::write(path, builder.build()).context("Failed to write default config file")?;
    Ok(())
}

fn schedule_override_comments() -> &'static str {
    "# Optional overrides for the active variant:\n\
     # day_start = 4.5        # Hour the day period begins, exclusive (0-24)\n\
     # day_end = 15.0         # Hour the evening decay begins (0-24)\n\
     # evening_end = 19.5     # Hour the night floor takes over (0-24)\n\
     # evening_floor = 0.25   # Lowest brightness of the evening decay (0.1-1.0)\n\
     # night_floor = 0.15     # Brightness held during the night (0.1-1.0)"
}

/// Renders one `[[monitor]]` block from a registry entry, so the generated
/// file always matches the built-in declarations.
fn monitor_block(entry: &MonitorEntry) -> String {
    let inputs = entry
        .inputs
        .iter()
        .map(|(name, code)| format!("{} = \"{}\"", toml_key(name), code))
        .collect::<Vec<_>>()
        .join(", ");
    let profiles = entry
        .profiles
        .iter()
        .map(|(profile, input)| format!("{} = \"{}\"", toml_key(profile), input))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "[[monitor]]\nmodel = \"{}\"\nvcp = \"{}\"\ninputs = {{ {} }}\nprofiles = {{ {} }}",
        entry.model, entry.vcp, inputs, profiles
    )
}

/// Quotes a TOML key unless it is a valid bare key.
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", key.replace('"', "\\\""))
    }
}

/// Builder for creating dynamically-aligned configuration files.
///
/// This builder maintains proper comment alignment by calculating the maximum
/// width of all setting lines and applying consistent padding. This ensures
/// that when constants change in constants.rs, the config file formatting
/// remains correct.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone, PartialEq)]
enum EntryType {
    Section,
    Setting { line: String, comment: String },
    Raw,
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{title}]"),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{key} = {value}");
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {comment}"),
            },
        });
        self
    }

    /// Adds a pre-formatted block, emitted verbatim. Used for table headers
    /// and array-of-table blocks the setting alignment does not apply to.
    fn add_raw(mut self, content: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: content.to_string(),
            entry_type: EntryType::Raw,
        });
        self
    }

    fn build(self) -> String {
        // Calculate the maximum width of all setting lines for alignment
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // +1 for one space between setting and comment

        let mut result = Vec::new();
        let mut previous: Option<EntryType> = None;

        for entry in self.entries {
            match &entry.entry_type {
                EntryType::Section => {
                    if previous.is_some() {
                        result.push(String::new()); // Empty line before new section
                    }
                    result.push(entry.content.clone());
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
                EntryType::Raw => {
                    // Raw blocks directly under their section header stay attached
                    if !matches!(previous, Some(EntryType::Section)) {
                        result.push(String::new());
                    }
                    result.push(entry.content.clone());
                }
            }
            previous = Some(entry.entry_type);
        }

        let mut content = result.join("\n");
        content.push('\n');
        content
    }
}
