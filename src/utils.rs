//! Small shared helpers.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Formats a path for display, shortening the home directory to `~`.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// The login name of the invoking user, from the environment.
///
/// Used as the default profile request when `profile` is run without an
/// argument; the config's alias table then maps it to an actual profile.
pub fn login_name() -> Result<String> {
    let name = std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .context("could not determine login name from USER or LOGNAME")?;
    if name.trim().is_empty() {
        bail!("login name from environment is empty");
    }
    Ok(name)
}
