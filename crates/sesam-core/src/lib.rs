//! Core sesam library (auth domain, config, logging).

pub mod auth;
pub mod config;
pub mod logging;
