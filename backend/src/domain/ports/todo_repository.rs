//! Port abstraction for todo persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by todo repository adapters.
    pub enum TodoPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "todo repository query failed: {message}",
    }
}

/// Storage contract for todo rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Return every todo ordered by identifier.
    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError>;

    /// Fetch a todo by identifier.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoPersistenceError>;

    /// Insert a new row and return the stored todo.
    ///
    /// `user_id` is stored as given; no user lookup happens.
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError>;
}
