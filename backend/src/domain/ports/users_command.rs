//! Driving port for user mutations.
//!
//! Inbound adapters hand over allow-listed values ([`NewUser`], [`UserPatch`])
//! so nothing outside those types can reach the store.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Domain use-case port for creating, updating, and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Insert a user without credentials.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Merge `patch` into the stored user and persist the result.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Remove a user and return its last known state.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
