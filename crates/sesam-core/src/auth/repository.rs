//! The network side of a login attempt.
//!
//! One HTTPS POST per call, no retries. The response body is never read; only
//! the status code decides the outcome.

use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use reqwest::StatusCode;

use super::{AuthenticationError, Credentials};

/// Default portal base URL. Overridable via config for proxies and tests.
pub const DEFAULT_BASE_URL: &str = "https://members.sesam.app";

/// Path of the login endpoint, relative to the base URL.
const LOGIN_PATH: &str = "/login";

/// Connect timeout for the login request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(100);

/// Total (read) timeout for the login request.
const READ_TIMEOUT: Duration = Duration::from_secs(100);

/// Performs the actual login call.
///
/// Object-safe so the service can hold `Arc<dyn AuthRepository>` and tests can
/// substitute scripted implementations.
pub trait AuthRepository: Send + Sync {
    /// Attempts one login with the given (non-validated) credentials.
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<(), AuthenticationError>>;
}

/// `AuthRepository` backed by an HTTPS client.
///
/// The client is built once with a cookie jar; cookies set by the portal are
/// replayed on later requests for the lifetime of this value (session
/// continuity is implicit, not modeled).
pub struct HttpAuthRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthRepository {
    /// Creates a repository against `base_url`, or the built-in portal URL
    /// when `None`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/');

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.base_url)
    }
}

/// Maps a response status to the login outcome.
///
/// The table is authoritative: 200 is success, the three named statuses get
/// their dedicated members, everything else degrades to `UnknownError`.
fn map_status(status: StatusCode) -> Result<(), AuthenticationError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_ACCEPTABLE => Err(AuthenticationError::NotAcceptable),
        StatusCode::UNAUTHORIZED => Err(AuthenticationError::Unauthorized),
        StatusCode::INTERNAL_SERVER_ERROR => Err(AuthenticationError::InternalServerError),
        _ => Err(AuthenticationError::UnknownError),
    }
}

impl AuthRepository for HttpAuthRepository {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<(), AuthenticationError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.login_url())
                .json(&Credentials { username, password })
                .send()
                .await
                .map_err(|err| {
                    // Diagnostic only; the user sees the mapped error label.
                    tracing::warn!(error = %err, "login request failed");
                    AuthenticationError::ConnectionError
                })?;

            map_status(response.status())
        })
    }
}
