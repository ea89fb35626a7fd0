//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Domain use-case port for reading todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosQuery: Send + Sync {
    /// Return every todo ordered by identifier.
    async fn list_todos(&self) -> Result<Vec<Todo>, Error>;

    /// Fetch a single todo.
    async fn get_todo(&self, id: TodoId) -> Result<Todo, Error>;
}
