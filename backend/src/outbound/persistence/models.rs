//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{todos, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub hashed_password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating user records.
///
/// Identifier and timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub age: i32,
    pub hashed_password: Option<&'a str>,
}

/// Changeset applied by user updates. The digest is never touched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub age: i32,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub done: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub done: bool,
    pub user_id: i64,
}
