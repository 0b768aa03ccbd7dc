//! Status command implementation.
//!
//! Reports the current schedule state and what the display tools can see,
//! without changing anything. A missing tool degrades to a warning so the
//! rest of the report still prints.

use anyhow::Result;
use chrono::Local;

use crate::backend::{DdcBackend, RandrBackend};
use crate::config::Config;
use crate::registry::ModelRegistry;
use crate::schedule::period_for_time;

/// Handle the status command.
pub fn handle_status_command(debug_enabled: bool) -> Result<()> {
    let config = super::load_environment(debug_enabled)?;

    let params = config.schedule_params();
    let now = Local::now();
    let period = period_for_time(now.time(), &params);
    let brightness = period.brightness(&params);

    log_block_start!("Schedule");
    log_indented!("Local time: {}", now.format("%H:%M:%S"));
    log_indented!("Period: {}", period.display_name());
    if let Some(progress) = period.progress() {
        log_indented!("Transition progress: {:.0}%", progress * 100.0);
    }
    log_indented!(
        "Scheduled brightness: {}%",
        (brightness * 1000.0).round() / 10.0
    );

    report_outputs(&config, debug_enabled);
    report_displays(&config, debug_enabled)?;

    log_end!();
    Ok(())
}

/// List the outputs xrandr reports as connected.
fn report_outputs(config: &Config, debug_enabled: bool) {
    log_block_start!("Connected outputs");

    let outputs = RandrBackend::new(config, debug_enabled).and_then(|b| b.list_outputs());
    match outputs {
        Ok(outputs) if outputs.is_empty() => log_indented!("(none)"),
        Ok(outputs) => {
            for output in outputs {
                log_indented!("{}", output.name);
            }
        }
        Err(e) => log_warning!("{e:#}"),
    }
}

/// List the DDC displays and their active input sources.
fn report_displays(config: &Config, debug_enabled: bool) -> Result<()> {
    let registry = config.model_registry()?;

    log_block_start!("Detected displays");

    let displays =
        DdcBackend::new(config, debug_enabled).and_then(|b| b.detect_displays(&registry));
    match displays {
        Ok(displays) if displays.is_empty() => log_indented!("(none)"),
        Ok(displays) => {
            for display in displays {
                log_indented!(
                    "{} (bus {}): {}",
                    display.model,
                    display.bus,
                    describe_source(&registry, &display.model, display.current_source.as_deref())
                );
            }
        }
        Err(e) => log_warning!("{e:#}"),
    }

    Ok(())
}

/// Render the active input source of one display for the report.
fn describe_source(registry: &ModelRegistry, model: &str, source: Option<&str>) -> String {
    match source {
        None => "off".to_string(),
        Some(code) => match registry.get(model).and_then(|spec| spec.input_by_code(code)) {
            Some(input) => input.name.clone(),
            None => format!("unknown input ({code})"),
        },
    }
}
