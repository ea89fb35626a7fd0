//! Todo data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// Validation errors returned by todo constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoValidationError {
    /// The identifier was not an integer.
    #[error("todo id must be an integer")]
    InvalidId,
}

/// Store-assigned todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = TodoValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| TodoValidationError::InvalidId)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task record.
///
/// `user_id` is advisory: the store does not check that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    body: String,
    done: bool,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Assemble a todo from stored components.
    #[must_use]
    pub fn new(id: TodoId, fields: NewTodo, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        let NewTodo {
            title,
            body,
            done,
            user_id,
        } = fields;
        Self {
            id,
            title,
            body,
            done,
            user_id,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Completion flag.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Owning user reference.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Allow-listed fields copied from an untrusted payload into a new todo row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodo {
    /// Title text.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Completion flag.
    pub done: bool,
    /// Owning user reference.
    pub user_id: UserId,
}
