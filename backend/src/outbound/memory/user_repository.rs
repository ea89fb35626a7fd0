//! Mutex-guarded in-memory `UserRepository`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserAccount, UserId, UserName};

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<i64, UserAccount>,
}

impl UserTable {
    fn name_taken(&self, name: &UserName, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|account| account.user.name() == name && Some(account.user.id()) != except)
    }
}

/// In-memory user store keyed by identifier.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserTable>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table.rows.values().map(|account| account.user.clone()).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .get(&id.as_i64())
            .map(|account| account.user.clone()))
    }

    async fn find_account_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .values()
            .find(|account| account.user.name() == name)
            .cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        if table.name_taken(user.name(), None) {
            return Err(UserPersistenceError::duplicate_name(user.name().as_ref()));
        }

        table.last_id += 1;
        let id = table.last_id;
        let now = Utc::now();
        let stored = User::new(UserId::new(id), user.name().clone(), user.age(), now, now);
        table.rows.insert(
            id,
            UserAccount {
                user: stored.clone(),
                password_digest: user.password_digest().cloned(),
            },
        );
        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut table = self.lock()?;
        if table.name_taken(user.name(), Some(user.id())) {
            return Err(UserPersistenceError::duplicate_name(user.name().as_ref()));
        }

        let Some(account) = table.rows.get_mut(&user.id().as_i64()) else {
            return Ok(None);
        };
        let updated = User::new(
            account.user.id(),
            user.name().clone(),
            user.age(),
            account.user.created_at(),
            Utc::now(),
        );
        account.user = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut table = self.lock()?;
        Ok(table.rows.remove(&id.as_i64()).is_some())
    }
}
