//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    Age, NewUser, PasswordDigest, User, UserAccount, UserId, UserName,
};

use super::error_mapping::{DieselFailure, classify_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

/// Map Diesel errors, attributing unique violations to `name`.
fn map_diesel_error(error: diesel::result::Error, name: &str) -> UserPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::UniqueViolation => UserPersistenceError::duplicate_name(name),
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> UserPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::UniqueViolation => UserPersistenceError::query("database error"),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn age_for_db(age: Age) -> Result<i32, UserPersistenceError> {
    i32::try_from(age.get())
        .map_err(|_| UserPersistenceError::query(format!("age {} out of range", age.get())))
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let name = UserName::new(row.name);
    let age = u32::try_from(row.age)
        .map_err(|_| UserPersistenceError::query(format!("stored user {}: negative age", row.id)))
        .and_then(|age| {
            Age::new(age).map_err(|err| {
                UserPersistenceError::query(format!("stored user {}: {err}", row.id))
            })
        })?;
    let user = User::new(
        UserId::new(row.id),
        name,
        age,
        row.created_at,
        row.updated_at,
    );

    Ok(UserAccount {
        user,
        password_digest: row.hashed_password.map(PasswordDigest::new),
    })
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    row_to_account(row).map(|account| account.user)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order_by(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.as_i64())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_account_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::name.eq(name.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            name: user.name().as_ref(),
            age: age_for_db(user.age())?,
            hashed_password: user.password_digest().map(PasswordDigest::as_str),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, new_row.name))?;

        row_to_user(row)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = UserUpdate {
            name: user.name().as_ref(),
            age: age_for_db(user.age())?,
            updated_at: Utc::now(),
        };

        let row: Option<UserRow> = diesel::update(users::table.find(user.id().as_i64()))
            .set(&changes)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, changes.name))?;

        row.map(row_to_user).transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(users::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_read_error)?;

        Ok(removed > 0)
    }
}
