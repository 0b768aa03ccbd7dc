//! External tool backends for display control.
//!
//! Brightness goes through xrandr ([`randr`]), input-source selection goes
//! through ddcutil ([`ddc`]). Each backend resolves its executable when it
//! is constructed and runs every invocation through the bounded [`runner`],
//! so a missing tool fails the command that needs it with a clear message
//! and a wedged tool cannot hang a batch.

pub mod ddc;
pub mod randr;
pub mod runner;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use ddc::{DdcBackend, Display};
pub use randr::{OutputDevice, RandrBackend};

/// Locates an external tool on PATH.
pub fn resolve_tool(name: &str) -> Result<PathBuf> {
    which::which(name).with_context(|| format!("'{name}' not found on PATH"))
}
