//! UI event types.
//!
//! Events are the only input to the reducer. The runtime collects them from
//! the terminal, the tick timer, and the view model's state channel.

use sesam_core::auth::AuthState;

/// Events processed by the reducer each frame.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (animation, frame cadence).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// The view model published a new auth state.
    AuthChanged(AuthState),
}
