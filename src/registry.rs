//! Registry of monitor models and their input-source wiring.
//!
//! Each model declares the VCP feature code used for input selection, the
//! two inputs physically cabled to it, and which input each profile maps to.
//! The registry ships with entries for the monitors this tool grew up with
//! and is extended (or overridden) through `[[monitor]]` blocks in the
//! config file. All declarations pass through [`ModelRegistry::from_entries`],
//! which rejects inconsistent wiring up front so batch operations never have
//! to reason about a half-valid model.

use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::constants::DEFAULT_INPUT_VCP;

/// One selectable input on a monitor: a human-readable name plus the VCP
/// value that selects it.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSource {
    pub name: String,
    pub code: String,
}

/// Raw declaration of a monitor model, before validation.
///
/// `inputs` are `(name, code)` pairs, `profiles` are `(profile, input name)`
/// pairs. Later entries handed to [`ModelRegistry::from_entries`] replace
/// earlier ones for the same model, which is how config entries override
/// the built-in set.
#[derive(Debug, Clone)]
pub struct MonitorEntry {
    pub model: String,
    pub vcp: String,
    pub inputs: Vec<(String, String)>,
    pub profiles: Vec<(String, String)>,
}

/// Validated control surface for one monitor model.
#[derive(Debug, Clone)]
pub struct MonitorSpec {
    model: String,
    vcp: String,
    inputs: Vec<InputSource>,
    /// Maps each input code to the code toggling switches to.
    transitions: HashMap<String, String>,
    /// Maps a lowercase profile name to an input name.
    profiles: HashMap<String, String>,
}

impl MonitorSpec {
    pub fn model(&self) -> &str {
        &self.model
    }

    /// VCP feature code used for input selection, normalized to `0x`-hex.
    pub fn vcp(&self) -> &str {
        &self.vcp
    }

    /// Declared inputs in declaration order.
    pub fn inputs(&self) -> &[InputSource] {
        &self.inputs
    }

    /// Looks up an input by its VCP value code, tolerating case and prefix
    /// variations in the way external tools report codes.
    pub fn input_by_code(&self, code: &str) -> Option<&InputSource> {
        let normalized = normalize_vcp_code(code).ok()?;
        self.inputs.iter().find(|input| input.code == normalized)
    }

    /// The input a toggle switches to when `current_code` is selected.
    ///
    /// Returns `None` when the reported code is not one of the declared
    /// inputs, in which case the caller skips the display.
    pub fn toggle_target(&self, current_code: &str) -> Option<&InputSource> {
        let normalized = normalize_vcp_code(current_code).ok()?;
        let next = self.transitions.get(&normalized)?;
        self.inputs.iter().find(|input| &input.code == next)
    }

    /// The input a named profile assigns on this model, if the profile is
    /// defined for it.
    pub fn profile_target(&self, profile: &str) -> Option<&InputSource> {
        let name = self.profiles.get(&profile.trim().to_lowercase())?;
        self.inputs.iter().find(|input| &input.name == name)
    }

    /// Profile names defined for this model, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The set of monitor models this tool knows how to drive.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    monitors: HashMap<String, MonitorSpec>,
}

impl ModelRegistry {
    /// Builds a registry from declarations, validating each one.
    ///
    /// Validation requires exactly two inputs per model (toggling is defined
    /// as swapping between them), unique input names and codes, profile
    /// targets that reference declared inputs, and VCP codes that parse as a
    /// single hex byte. The toggle transition table is derived here and
    /// checked for completeness before the registry is handed out.
    pub fn from_entries(entries: impl IntoIterator<Item = MonitorEntry>) -> Result<Self> {
        let mut monitors = HashMap::new();
        for entry in entries {
            let spec = validate_entry(entry)?;
            monitors.insert(spec.model.clone(), spec);
        }
        Ok(Self { monitors })
    }

    /// The registry of built-in models only.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(Self::builtin_entries())
    }

    /// Declarations for the models supported out of the box.
    pub fn builtin_entries() -> Vec<MonitorEntry> {
        vec![
            entry(
                "DELL S2721DS",
                DEFAULT_INPUT_VCP,
                &[("HDMI_1", "0x11"), ("HDMI_2", "0x12")],
                &[("home", "HDMI_1"), ("work", "HDMI_2")],
            ),
            entry(
                "DELL P2715Q",
                DEFAULT_INPUT_VCP,
                &[("DP", "0x0f"), ("HDMI", "0x11")],
                &[("home", "DP"), ("work", "HDMI")],
            ),
        ]
    }

    /// Looks up the [`MonitorSpec`] for an exact model string as reported by detection.
    pub fn get(&self, model: &str) -> Option<&MonitorSpec> {
        self.monitors.get(model)
    }

    /// Known model names, sorted for stable output.
    pub fn models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = self.monitors.keys().map(String::as_str).collect();
        models.sort_unstable();
        models
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

fn entry(
    model: &str,
    vcp: &str,
    inputs: &[(&str, &str)],
    profiles: &[(&str, &str)],
) -> MonitorEntry {
    MonitorEntry {
        model: model.to_string(),
        vcp: vcp.to_string(),
        inputs: inputs
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect(),
        profiles: profiles
            .iter()
            .map(|(profile, input)| (profile.to_string(), input.to_string()))
            .collect(),
    }
}

/// Normalizes a VCP code to canonical `0x`-prefixed lowercase hex.
///
/// Accepts `0x11`, `0X11`, and bare `11`; anything that does not parse as a
/// single hex byte is an error.
pub fn normalize_vcp_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 2 {
        bail!("invalid VCP code '{code}'");
    }
    let value = u8::from_str_radix(digits, 16)
        .map_err(|_| anyhow::anyhow!("invalid VCP code '{code}'"))?;
    Ok(format!("{value:#04x}"))
}

fn validate_entry(entry: MonitorEntry) -> Result<MonitorSpec> {
    let model = entry.model.trim().to_string();
    if model.is_empty() {
        bail!("monitor model name cannot be empty");
    }

    let vcp = normalize_vcp_code(&entry.vcp)
        .map_err(|e| anyhow::anyhow!("monitor '{model}': {e}"))?;

    if entry.inputs.len() != 2 {
        bail!(
            "monitor '{}' must declare exactly two input sources, found {}",
            model,
            entry.inputs.len()
        );
    }

    let mut inputs = Vec::with_capacity(entry.inputs.len());
    for (name, code) in &entry.inputs {
        let name = name.trim().to_string();
        if name.is_empty() {
            bail!("monitor '{model}' has an input with an empty name");
        }
        let code = normalize_vcp_code(code)
            .map_err(|e| anyhow::anyhow!("input '{name}' of monitor '{model}': {e}"))?;
        if inputs
            .iter()
            .any(|input: &InputSource| input.name.eq_ignore_ascii_case(&name))
        {
            bail!("monitor '{model}' declares input '{name}' twice");
        }
        if inputs.iter().any(|input: &InputSource| input.code == code) {
            bail!("monitor '{model}' assigns code {code} to more than one input");
        }
        inputs.push(InputSource { name, code });
    }

    // Two unique inputs always yield the swap table; the completeness check
    // stays as a guard against future changes to how the table is built.
    let mut transitions = HashMap::new();
    transitions.insert(inputs[0].code.clone(), inputs[1].code.clone());
    transitions.insert(inputs[1].code.clone(), inputs[0].code.clone());
    for input in &inputs {
        let next = transitions.get(&input.code);
        let valid = next
            .map(|next| next != &input.code && inputs.iter().any(|i| &i.code == next))
            .unwrap_or(false);
        if !valid {
            bail!("toggle table for monitor '{model}' is incomplete");
        }
    }

    let mut profiles = HashMap::new();
    for (profile, input_name) in &entry.profiles {
        let profile = profile.trim().to_lowercase();
        if profile.is_empty() {
            bail!("monitor '{model}' has a profile with an empty name");
        }
        if !inputs.iter().any(|input| &input.name == input_name) {
            bail!(
                "profile '{}' of monitor '{}' references undeclared input '{}'",
                profile,
                model,
                input_name
            );
        }
        if profiles.insert(profile.clone(), input_name.clone()).is_some() {
            bail!("monitor '{model}' declares profile '{profile}' twice");
        }
    }

    Ok(MonitorSpec {
        model,
        vcp,
        inputs,
        transitions,
        profiles,
    })
}
