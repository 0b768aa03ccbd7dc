//! Profile command implementation.
//!
//! Switches every detected monitor to the input source a named profile
//! declares for its model. Without an explicit name the login name is used,
//! after passing through the configured alias table, so `monitorctl profile`
//! on a shared machine lands each user on their own setup.

use anyhow::Result;

use crate::backend::DdcBackend;
use crate::constants::EXIT_FAILURE;
use crate::utils::login_name;

/// Handle the profile command.
pub fn handle_profile_command(name: Option<&str>, debug_enabled: bool) -> Result<()> {
    let config = super::load_environment(debug_enabled)?;

    let requested = match name {
        Some(n) => n.to_string(),
        None => match login_name() {
            Ok(login) => login,
            Err(e) => {
                log_error_exit!("{e:#}");
                std::process::exit(EXIT_FAILURE);
            }
        },
    };
    let profile = config.resolve_profile(&requested);

    log_block_start!("Applying profile '{profile}'");

    let registry = config.model_registry()?;
    let backend = DdcBackend::new(&config, debug_enabled)?;
    let displays = backend.detect_displays(&registry)?;

    if displays.is_empty() {
        log_pipe!();
        log_warning!("No DDC-capable displays detected");
        log_end!();
        return Ok(());
    }

    let mut applied = 0;
    for display in &displays {
        let Some(spec) = registry.get(&display.model) else {
            continue;
        };

        match spec.profile_target(&profile) {
            Some(target) => {
                log_decorated!("Switching {} to {}", display.model, target.name);
                match backend.set_input_source(display, spec, target) {
                    Ok(()) => applied += 1,
                    Err(e) => {
                        log_pipe!();
                        log_warning!("{e}");
                    }
                }
            }
            None => {
                log_decorated!(
                    "No '{}' profile for {} (has: {}), leaving it unchanged",
                    profile,
                    display.model,
                    spec.profile_names().join(", ")
                );
            }
        }
    }

    if applied == 0 {
        log_pipe!();
        log_warning!("Profile '{profile}' did not match any detected monitor");
    }

    log_end!();
    Ok(())
}
