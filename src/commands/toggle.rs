//! Toggle command implementation.
//!
//! Reads the active input source of every detected DDC monitor and switches
//! each one to the other input declared for its model. Monitors that are
//! powered off or in an unrecognized state are skipped with a note; a failure
//! on one monitor never blocks the rest.

use anyhow::Result;

use crate::backend::{DdcBackend, Display};
use crate::registry::{InputSource, MonitorSpec};

/// What to do with one display, decided before anything is written.
#[derive(Debug, PartialEq)]
enum TogglePlan<'a> {
    /// Current source is declared for the model; switch to the other input.
    Switch(&'a InputSource),
    /// No readable source, the display is powered off.
    Off,
    /// Reported source code is not in the model's declared set.
    Unknown(&'a str),
}

/// Decides the toggle action for one display without touching hardware.
fn toggle_plan<'a>(display: &'a Display, spec: &'a MonitorSpec) -> TogglePlan<'a> {
    match display.current_source.as_deref() {
        None => TogglePlan::Off,
        Some(code) => match spec.toggle_target(code) {
            Some(target) => TogglePlan::Switch(target),
            None => TogglePlan::Unknown(code),
        },
    }
}

/// Handle the toggle command.
pub fn handle_toggle_command(debug_enabled: bool) -> Result<()> {
    let config = super::load_environment(debug_enabled)?;
    let registry = config.model_registry()?;

    let backend = DdcBackend::new(&config, debug_enabled)?;
    let displays = backend.detect_displays(&registry)?;

    if displays.is_empty() {
        log_pipe!();
        log_warning!("No DDC-capable displays detected");
        log_end!();
        return Ok(());
    }

    for display in &displays {
        // Detection only reports registered models, so the lookup holds
        let Some(spec) = registry.get(&display.model) else {
            continue;
        };

        match toggle_plan(display, spec) {
            TogglePlan::Switch(target) => {
                log_block_start!("Switching {} to {}", display.model, target.name);
                if let Err(e) = backend.set_input_source(display, spec, target) {
                    log_pipe!();
                    log_warning!("{e}");
                }
            }
            TogglePlan::Off => {
                log_pipe!();
                log_info!("Skipping {} because it's off", display.model);
            }
            TogglePlan::Unknown(code) => {
                log_pipe!();
                log_warning!(
                    "Unrecognized input source '{}' on {} (bus {}), skipping",
                    code,
                    display.model,
                    display.bus
                );
            }
        }
    }

    log_end!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModelRegistry;

    fn display(model: &str, source: Option<&str>) -> Display {
        Display {
            model: model.to_string(),
            bus: 7,
            current_source: source.map(str::to_string),
        }
    }

    #[test]
    fn test_powered_off_display_plans_no_switch() {
        let registry = ModelRegistry::builtin().unwrap();
        let spec = registry.get("DELL S2721DS").unwrap();
        let off = display("DELL S2721DS", None);
        assert_eq!(toggle_plan(&off, spec), TogglePlan::Off);
    }

    #[test]
    fn test_known_source_plans_switch_to_other_input() {
        let registry = ModelRegistry::builtin().unwrap();
        let spec = registry.get("DELL S2721DS").unwrap();

        let on_first = display("DELL S2721DS", Some("0x11"));
        match toggle_plan(&on_first, spec) {
            TogglePlan::Switch(target) => assert_eq!(target.name, "HDMI_2"),
            other => panic!("expected a switch, got {other:?}"),
        }

        let on_second = display("DELL S2721DS", Some("0x12"));
        match toggle_plan(&on_second, spec) {
            TogglePlan::Switch(target) => assert_eq!(target.name, "HDMI_1"),
            other => panic!("expected a switch, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_plans_round_trip() {
        let registry = ModelRegistry::builtin().unwrap();
        let spec = registry.get("DELL P2715Q").unwrap();

        let start = display("DELL P2715Q", Some("0x0f"));
        let TogglePlan::Switch(first_hop) = toggle_plan(&start, spec) else {
            panic!("expected a switch from 0x0f");
        };

        let flipped = display("DELL P2715Q", Some(first_hop.code.as_str()));
        let TogglePlan::Switch(second_hop) = toggle_plan(&flipped, spec) else {
            panic!("expected a switch back from {}", first_hop.code);
        };
        assert_eq!(second_hop.code, "0x0f");
    }

    #[test]
    fn test_unknown_source_code_plans_no_switch() {
        let registry = ModelRegistry::builtin().unwrap();
        let spec = registry.get("DELL S2721DS").unwrap();
        let odd = display("DELL S2721DS", Some("0x03"));
        assert_eq!(toggle_plan(&odd, spec), TogglePlan::Unknown("0x03"));

        let garbled = display("DELL S2721DS", Some("garbage"));
        assert_eq!(toggle_plan(&garbled, spec), TogglePlan::Unknown("garbage"));
    }
}
