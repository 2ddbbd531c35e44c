//! Config inspection commands.

use anyhow::Result;
use sesam_core::config::{Config, paths};

/// Prints the path to the config file.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

/// Creates a default config file if one does not exist.
///
/// # Errors
/// Returns an error if the file already exists or cannot be written.
pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
