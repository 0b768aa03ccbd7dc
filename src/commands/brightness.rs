//! Brightness command implementation.
//!
//! Applies a brightness value to every connected xrandr output. Without an
//! explicit value the schedule decides: full brightness during the day, a
//! decaying curve through the evening, a fixed floor at night.

use anyhow::Result;
use chrono::Local;
use std::thread;

use crate::backend::RandrBackend;
use crate::backend::randr::validate_brightness;
use crate::constants::EXIT_FAILURE;
use crate::schedule::period_for_time;

/// Handle the brightness command.
///
/// `value` overrides the schedule when given; it must already be a factor in
/// the accepted range, not a percentage.
pub fn handle_brightness_command(value: Option<f64>, debug_enabled: bool) -> Result<()> {
    let config = super::load_environment(debug_enabled)?;
    let params = config.schedule_params();

    let target = match value {
        Some(requested) => {
            if let Err(e) = validate_brightness(requested) {
                log_error_exit!("{e}");
                std::process::exit(EXIT_FAILURE);
            }
            log_block_start!("Applying requested brightness");
            requested
        }
        None => {
            let period = period_for_time(Local::now().time(), &params);
            log_block_start!("Schedule period: {}", period.display_name());
            period.brightness(&params)
        }
    };

    let backend = RandrBackend::new(&config, debug_enabled)?;
    let outputs = backend.list_outputs()?;

    if outputs.is_empty() {
        log_pipe!();
        log_warning!("No connected outputs reported by xrandr");
        log_end!();
        return Ok(());
    }

    // Pause between outputs so slow display hardware settles before the
    // next adjustment
    for (index, output) in outputs.iter().enumerate() {
        if index > 0 {
            thread::sleep(config.device_delay());
        }
        match backend.set_brightness(output, target) {
            Ok(()) => {
                let percent = (target * 1000.0).round() / 10.0;
                log_decorated!("{}'s brightness set to {}%", output.name, percent);
            }
            Err(e) => {
                log_pipe!();
                log_warning!("Skipping {}: {e}", output.name);
            }
        }
    }

    log_end!();
    Ok(())
}
