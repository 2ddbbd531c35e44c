//! Interactive login screen command.

use anyhow::Result;
use sesam_core::config::Config;

/// Runs the full-screen login UI.
///
/// # Errors
/// Returns an error if the stack cannot be built or the screen fails.
pub fn run(config: &Config) -> Result<()> {
    let view_model = super::build_view_model(config)?;
    sesam_tui::run_login_screen(view_model)
}
