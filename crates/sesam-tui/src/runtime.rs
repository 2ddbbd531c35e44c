//! Login screen runtime - owns the terminal, runs the event loop, executes
//! effects.
//!
//! The reducer stays pure and produces effects; this module executes them.
//! The view model's watch channel is polled each frame, so state published by
//! the login task reaches the screen without blocking the UI thread.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sesam_core::auth::{AuthState, LoginViewModel};
use tokio::sync::watch;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::LoginScreenState;
use crate::{render, terminal, update};

/// Poll duration while a login is in flight (spinner animation).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing is
/// happening.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen login runtime.
///
/// Owns the terminal, the screen state, and the view model. Terminal state is
/// restored on drop, including the panic path.
pub struct LoginScreenRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: LoginScreenState,
    view_model: LoginViewModel,
    auth_rx: watch::Receiver<AuthState>,
}

impl LoginScreenRuntime {
    /// Creates the runtime and enters the alternate screen.
    ///
    /// # Errors
    /// Returns an error if terminal setup fails.
    pub fn new(view_model: LoginViewModel) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let auth_rx = view_model.subscribe();

        Ok(Self {
            terminal,
            state: LoginScreenState::new(),
            view_model,
            auth_rx,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            self.terminal.draw(|frame| {
                render::render(&self.state, frame);
            })?;
        }

        Ok(())
    }

    /// Collects events from the terminal, the tick cadence, and the view
    /// model's state channel.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = vec![UiEvent::Tick];

        let poll_timeout = if self.state.pending {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        if event::poll(poll_timeout)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain whatever else is already queued before rendering.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.auth_rx.has_changed().unwrap_or(false) {
            events.push(UiEvent::AuthChanged(*self.auth_rx.borrow_and_update()));
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::SubmitLogin { username, password } => {
                    let accepted = self.view_model.login(&username, &password);
                    if !accepted {
                        // The view model dropped the submit; stop the spinner.
                        tracing::debug!("submit dropped, attempt already in flight");
                        self.state.pending = false;
                    }
                }
            }
        }
    }
}

impl Drop for LoginScreenRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
