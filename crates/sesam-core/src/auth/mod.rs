//! Login domain: credentials, outcome enumerations, repository, service,
//! and the view model that publishes the screen-visible state.

use std::fmt;

use serde::Serialize;

pub mod repository;
pub mod service;
pub mod view_model;

pub use repository::{AuthRepository, HttpAuthRepository};
pub use service::AuthService;
pub use view_model::LoginViewModel;

/// Request body for one login attempt.
///
/// Ephemeral: serialized once per request, never stored, never logged.
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Closed set of reasons a login attempt did not succeed.
///
/// Every HTTP status and every transport failure maps to exactly one member;
/// statuses without a dedicated member fall through to `UnknownError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    NotAcceptable,
    Unauthorized,
    InternalServerError,
    ConnectionError,
    UnknownError,
}

impl AuthenticationError {
    /// Screen-visible label for this error.
    pub fn label(self) -> &'static str {
        match self {
            AuthenticationError::NotAcceptable => "Not acceptable",
            AuthenticationError::Unauthorized => "Unauthorized",
            AuthenticationError::InternalServerError => "Internal server error",
            AuthenticationError::ConnectionError => "Connection error",
            AuthenticationError::UnknownError => "Unknown error",
        }
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the last login attempt, as shown to the user.
///
/// A single cell holding one of these is the only piece of mutable state in
/// the login flow. It is overwritten (not merged) on every attempt and has no
/// terminal member; retries cycle it indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No successful login yet (initial value).
    #[default]
    Unauthorized,
    /// The last attempt succeeded.
    Authorized,
    /// The last attempt failed with the given error.
    Error(AuthenticationError),
}

impl AuthState {
    /// Screen-visible label for this state.
    pub fn label(self) -> &'static str {
        match self {
            AuthState::Unauthorized => "Not authorized yet",
            AuthState::Authorized => "Authorized",
            AuthState::Error(err) => err.label(),
        }
    }
}
