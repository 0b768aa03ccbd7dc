//! # monitorctl Library
//!
//! Internal library for the monitorctl binary application
//!
//! This library exists to enable testing of the internals and provide clean
//! separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Schedule**: `schedule` module maps wall-clock time to a brightness factor
//! - **Registry**: `registry` module describes known monitor models, their input
//!   sources, and the profiles that select between them
//! - **Backends**: `backend` module wraps the external display tools (xrandr for
//!   brightness, ddcutil for input-source control)
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for the CLI subcommands (brightness, toggle,
//!   profile, status)
//! - **Infrastructure**: logging and small shared utilities

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod backend;
pub mod commands;
pub mod config;
pub mod constants;
pub mod registry;
pub mod schedule;
pub mod utils;
