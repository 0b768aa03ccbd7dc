//! Main application entry point and command dispatch.
//!
//! This stays deliberately thin: parse the command line, record a custom
//! configuration directory if one was given, and hand off to the matching
//! handler in `commands`. All real work lives in the library so it can be
//! tested without spawning the binary.

use anyhow::Result;

use monitorctl::args::{self, CliAction, ParsedArgs};
use monitorctl::commands;
use monitorctl::config;
use monitorctl::constants::EXIT_FAILURE;

fn main() -> Result<()> {
    // Parse command-line arguments
    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Brightness {
            debug_enabled,
            value,
            config_dir,
        } => {
            config::set_config_dir(config_dir)?;
            commands::brightness::handle_brightness_command(value, debug_enabled)
        }
        CliAction::Toggle {
            debug_enabled,
            config_dir,
        } => {
            config::set_config_dir(config_dir)?;
            commands::toggle::handle_toggle_command(debug_enabled)
        }
        CliAction::Profile {
            debug_enabled,
            name,
            config_dir,
        } => {
            config::set_config_dir(config_dir)?;
            commands::profile::handle_profile_command(name.as_deref(), debug_enabled)
        }
        CliAction::Status {
            debug_enabled,
            config_dir,
        } => {
            config::set_config_dir(config_dir)?;
            commands::status::handle_status_command(debug_enabled)
        }
    }
}
