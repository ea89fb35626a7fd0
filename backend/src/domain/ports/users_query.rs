//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user ordered by identifier.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Fetch a single user; absent rows yield [`crate::domain::ErrorCode::NotFound`].
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
