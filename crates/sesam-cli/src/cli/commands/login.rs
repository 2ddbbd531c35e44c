//! Headless login command.

use anyhow::{Context, Result};
use sesam_core::auth::AuthState;
use sesam_core::config::Config;

/// Runs one login attempt and reports the outcome.
///
/// # Errors
/// Fails with the mapped error label when the attempt does not succeed, so
/// the process exit code reflects the outcome.
pub async fn run(config: &Config, username: &str, password: &str) -> Result<()> {
    let view_model = super::build_view_model(config)?;
    let mut rx = view_model.subscribe();

    if !view_model.login(username, password) {
        anyhow::bail!("a login attempt is already in flight");
    }

    rx.changed()
        .await
        .context("login task ended without publishing a state")?;

    match *rx.borrow() {
        AuthState::Authorized => {
            tracing::info!(username, "login succeeded");
            println!("Authorized");
            Ok(())
        }
        AuthState::Error(err) => {
            tracing::info!(username, error = %err, "login failed");
            anyhow::bail!("login failed: {err}")
        }
        AuthState::Unauthorized => anyhow::bail!("login did not complete"),
    }
}
