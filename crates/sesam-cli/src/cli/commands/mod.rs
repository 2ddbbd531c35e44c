//! Command implementations.
//!
//! Each command composes the auth stack explicitly: repository → service →
//! view model. No injection framework; plain constructors at process start.

pub mod config;
pub mod login;
pub mod screen;

use std::sync::Arc;

use anyhow::Result;
use sesam_core::auth::{AuthService, HttpAuthRepository, LoginViewModel};
use sesam_core::config::Config;

/// Builds the view model over the real HTTP stack.
pub fn build_view_model(config: &Config) -> Result<LoginViewModel> {
    let repository = HttpAuthRepository::new(config.portal.effective_base_url())?;
    let service = AuthService::new(Arc::new(repository));
    Ok(LoginViewModel::new(service))
}
