//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserAccount, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The unique index on `users.name` rejected the write.
        DuplicateName { name: String } => "user name already taken: {name}",
    }
}

/// Storage contract for user rows.
///
/// Adapters own identifier and timestamp assignment: `insert` sets `id`,
/// `created_at`, and `updated_at`; `update` advances `updated_at`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user together with its password digest by exact name.
    async fn find_account_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Insert a new row and return the stored user.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Overwrite `name` and `age` of an existing row.
    ///
    /// Returns `None` when the row no longer exists. The stored digest is
    /// left untouched.
    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a row, reporting whether one was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
