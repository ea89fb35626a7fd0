//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing store or hashing scheme, which keeps handler tests deterministic.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, User};

/// Message shared by every rejected login.
pub const AUTHENTICATION_FAILED_MESSAGE: &str = "Authentication failed";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// Unknown users and wrong passwords produce the same error.
    async fn login(&self, credentials: &Credentials) -> Result<User, Error>;
}
