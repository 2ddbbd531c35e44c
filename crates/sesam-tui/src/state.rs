//! Login screen state.

use sesam_core::auth::AuthState;

use crate::field::FieldBuffer;

/// Which input field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Password,
}

impl Focus {
    /// Returns the other field.
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Username,
        }
    }
}

/// All state of the login screen.
///
/// Mutated only by the reducer in `update`; read by the renderer.
pub struct LoginScreenState {
    /// Flag indicating the screen should quit.
    pub should_quit: bool,
    /// Field with keyboard focus.
    pub focus: Focus,
    /// Username input.
    pub username: FieldBuffer,
    /// Password input (rendered masked).
    pub password: FieldBuffer,
    /// Last published auth state.
    pub auth: AuthState,
    /// True while a login attempt is in flight.
    pub pending: bool,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl LoginScreenState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Username,
            username: FieldBuffer::default(),
            password: FieldBuffer::default(),
            auth: AuthState::Unauthorized,
            pending: false,
            spinner_frame: 0,
        }
    }

    /// Returns the focused field buffer.
    pub fn focused_field_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            Focus::Username => &mut self.username,
            Focus::Password => &mut self.password,
        }
    }
}

impl Default for LoginScreenState {
    fn default() -> Self {
        Self::new()
    }
}
