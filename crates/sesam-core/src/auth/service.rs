//! Pass-through facade over the repository.
//!
//! Carries no logic of its own; it exists as the substitution seam between
//! the view model and the network layer.

use std::sync::Arc;

use super::AuthenticationError;
use super::repository::AuthRepository;

/// Facade with the same contract as [`AuthRepository`], forwarding unchanged.
#[derive(Clone)]
pub struct AuthService {
    repository: Arc<dyn AuthRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    /// Attempts one login by delegating to the repository.
    ///
    /// # Errors
    /// Returns the repository's mapped [`AuthenticationError`] on failure.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthenticationError> {
        self.repository.login(username, password).await
    }
}
