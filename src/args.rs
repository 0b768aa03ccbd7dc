//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Apply scheduled (or explicitly requested) brightness to all outputs
    Brightness {
        debug_enabled: bool,
        value: Option<f64>,
        config_dir: Option<String>,
    },
    /// Toggle every detected monitor to its other declared input source
    Toggle {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Switch all detected monitors to a named profile
    Profile {
        debug_enabled: bool,
        name: Option<String>,
        config_dir: Option<String>,
    },
    /// Report schedule state and detected hardware without changing anything
    Status {
        debug_enabled: bool,
        config_dir: Option<String>,
    },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// This function processes the arguments and determines what action should
    /// be taken, including whether to show help, version info, or run one of
    /// the subcommands.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut display_version = false;
        let mut unknown_arg_found = false;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Find the first non-flag argument which could be a subcommand.
        // We need to skip over flags and their arguments.
        let mut potential_command_idx = None;
        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = &args_vec[idx];
            if arg.starts_with('-') {
                // This is a flag, check if it consumes the next argument
                if matches!(arg.as_str(), "--config" | "-c") {
                    idx += 2; // Skip the flag and its argument
                } else {
                    idx += 1; // Just skip the flag
                }
            } else {
                // Found a non-flag argument, this could be our command
                potential_command_idx = Some(idx);
                break;
            }
        }

        if let Some(cmd_idx) = potential_command_idx {
            let command = &args_vec[cmd_idx];

            // Extract debug flag and config dir from anywhere in args
            let debug_enabled = args_vec.iter().any(|arg| arg == "--debug" || arg == "-d");

            // Extract config dir if present
            let config_dir = args_vec
                .iter()
                .position(|arg| arg == "--config" || arg == "-c")
                .and_then(|idx| args_vec.get(idx + 1))
                .cloned();

            // Check for help/version flags which take precedence
            if args_vec
                .iter()
                .any(|arg| arg == "--version" || arg == "-V" || arg == "-v")
            {
                return ParsedArgs {
                    action: CliAction::ShowVersion,
                };
            }
            if args_vec.iter().any(|arg| arg == "--help" || arg == "-h") {
                return ParsedArgs {
                    action: CliAction::ShowHelp,
                };
            }

            // Check if there are multiple commands (error condition).
            // We need to be careful with commands that take arguments:
            // "profile toggle" is allowed (toggle is the profile name),
            // but "toggle profile" is not.
            let check_for_multiple_commands = |start_idx: usize| -> Option<String> {
                for arg in args_vec.iter().skip(start_idx) {
                    if arg.starts_with('-') {
                        continue; // Skip flags
                    }
                    if matches!(
                        arg.as_str(),
                        "brightness" | "b" | "toggle" | "t" | "profile" | "p" | "status" | "s"
                    ) {
                        return Some(arg.clone());
                    }
                }
                None
            };

            // Check based on the command type
            let conflicting_command = match command.as_str() {
                "brightness" | "b" => {
                    // Brightness takes an optional numeric argument, check after it
                    let value_present = args_vec
                        .get(cmd_idx + 1)
                        .is_some_and(|arg| arg.parse::<f64>().is_ok());
                    if value_present {
                        check_for_multiple_commands(cmd_idx + 2)
                    } else {
                        check_for_multiple_commands(cmd_idx + 1)
                    }
                }
                "toggle" | "t" | "status" | "s" => {
                    // These take no arguments, check immediately after
                    check_for_multiple_commands(cmd_idx + 1)
                }
                "profile" | "p" => {
                    // Profile takes an optional name, check after that
                    if cmd_idx + 1 < args_vec.len() && !args_vec[cmd_idx + 1].starts_with('-') {
                        check_for_multiple_commands(cmd_idx + 2)
                    } else {
                        check_for_multiple_commands(cmd_idx + 1)
                    }
                }
                _ => None,
            };

            if let Some(conflict) = conflicting_command {
                log_error!(
                    "Cannot use multiple commands at once: '{}' and '{}'",
                    command,
                    conflict
                );
                return ParsedArgs {
                    action: CliAction::ShowHelpDueToError,
                };
            }

            match command.as_str() {
                "brightness" | "b" => {
                    // Parse optional brightness value: brightness [value].
                    // Numeric parse wins over flag handling, so a negative
                    // value like -0.5 reaches validation instead of being
                    // dropped as a flag.
                    let mut value = None;
                    if let Some(arg) = args_vec.get(cmd_idx + 1) {
                        match arg.parse::<f64>() {
                            Ok(parsed) => value = Some(parsed),
                            Err(_) if arg.starts_with('-') => {} // A flag, not a value
                            Err(_) => {
                                log_warning!(
                                    "Invalid brightness value: '{}'. Usage: monitorctl brightness [value]",
                                    arg
                                );
                                return ParsedArgs {
                                    action: CliAction::ShowHelpDueToError,
                                };
                            }
                        }
                    }
                    return ParsedArgs {
                        action: CliAction::Brightness {
                            debug_enabled,
                            value,
                            config_dir,
                        },
                    };
                }
                "toggle" | "t" => {
                    return ParsedArgs {
                        action: CliAction::Toggle {
                            debug_enabled,
                            config_dir,
                        },
                    };
                }
                "profile" | "p" => {
                    // Parse optional profile name: profile [name]
                    let name = if cmd_idx + 1 < args_vec.len()
                        && !args_vec[cmd_idx + 1].starts_with('-')
                    {
                        Some(args_vec[cmd_idx + 1].clone())
                    } else {
                        None
                    };
                    return ParsedArgs {
                        action: CliAction::Profile {
                            debug_enabled,
                            name,
                            config_dir,
                        },
                    };
                }
                "status" | "s" => {
                    return ParsedArgs {
                        action: CliAction::Status {
                            debug_enabled,
                            config_dir,
                        },
                    };
                }
                _ => {
                    // Unknown subcommand - show error and help
                    log_warning!("Unknown command: {}", command);
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            }
        }

        // No subcommand: only standalone flags remain
        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => {} // Usage is the fallback action anyway
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => {} // Meaningless without a command, tolerated
                "--config" | "-c" => {
                    // Parse: --config <directory>
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        i += 1; // Skip the directory argument
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                _ => {
                    if arg_str.starts_with('-') {
                        log_warning!("Unknown option: {arg_str}");
                        unknown_arg_found = true;
                    }
                }
            }
            i += 1;
        }

        // Determine the action based on parsed flags. Without a subcommand
        // the only useful outcome is usage text, so help is the fallback.
        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::ShowHelp
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("monitorctl [OPTIONS] <COMMAND>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("brightness, b [value]  Set brightness on all outputs (default: scheduled)");
    log_indented!("toggle, t              Switch every monitor to its other input source");
    log_indented!("profile, p [name]      Switch monitors to a named profile (default: login name)");
    log_indented!("status, s              Show schedule state and detected hardware");
    log_end!();
}
