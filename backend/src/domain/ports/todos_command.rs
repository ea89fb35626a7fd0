//! Driving port for todo creation.

use async_trait::async_trait;

use crate::domain::{Error, NewTodo, Todo};

/// Domain use-case port for creating todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosCommand: Send + Sync {
    /// Insert a todo. The referenced user is not checked.
    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, Error>;
}
