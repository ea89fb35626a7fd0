//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`], turning
//! persistence failures into domain errors and absent rows into `NotFound`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId, UserPatch};

pub(crate) const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub(crate) const USER_EXISTS_MESSAGE: &str = "User already exists";

/// Map repository failures to domain errors.
///
/// Duplicate names become `Conflict`; everything else is internal.
pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateName { .. } => Error::conflict(USER_EXISTS_MESSAGE),
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn require(&self, id: UserId) -> Result<User, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repo.list().await.map_err(map_user_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.require(id).await
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .repo
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        tracing::info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        let current = self.require(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }

        self.repo
            .update(&current.merged(&patch))
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let current = self.require(id).await?;
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(map_user_persistence_error)?;
        if !removed {
            return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(current)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
