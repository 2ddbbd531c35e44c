//! Full-screen login UI for sesam.
//!
//! Elm-style split: `state` holds the screen state, `update` is the pure
//! reducer, `render` is the pure view, and `runtime` owns the terminal and
//! executes effects.

pub mod effects;
pub mod events;
pub mod field;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use sesam_core::auth::LoginViewModel;

use crate::runtime::LoginScreenRuntime;

/// Runs the interactive login screen until the user quits.
///
/// Must be called from within a tokio runtime; login attempts are spawned on
/// it while the event loop blocks this thread.
///
/// # Errors
/// Returns an error if no terminal is attached or terminal setup fails.
pub fn run_login_screen(view_model: LoginViewModel) -> Result<()> {
    // The screen requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The login screen requires a terminal.\n\
             Use `sesam login --username <u> --password <p>` for non-interactive login."
        );
    }

    let mut runtime = LoginScreenRuntime::new(view_model)?;
    runtime.run()
}
