//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, User};

/// Domain use-case port for signup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a new user with a hashed password.
    async fn signup(&self, credentials: &Credentials) -> Result<User, Error>;
}
