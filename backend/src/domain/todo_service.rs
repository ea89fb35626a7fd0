//! Todo domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TodoPersistenceError, TodoRepository, TodosCommand, TodosQuery};
use crate::domain::{Error, NewTodo, Todo, TodoId};

const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found";

fn map_todo_persistence_error(error: TodoPersistenceError) -> Error {
    match error {
        TodoPersistenceError::Connection { message } => {
            Error::internal(format!("todo repository unavailable: {message}"))
        }
        TodoPersistenceError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
    }
}

/// Todo service implementing [`TodosQuery`] and [`TodosCommand`].
#[derive(Clone)]
pub struct TodoService<R> {
    repo: Arc<R>,
}

impl<R> TodoService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> TodosQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list_todos(&self) -> Result<Vec<Todo>, Error> {
        self.repo.list().await.map_err(map_todo_persistence_error)
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_todo_persistence_error)?
            .ok_or_else(|| Error::not_found(TODO_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> TodosCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, Error> {
        let created = self
            .repo
            .insert(&todo)
            .await
            .map_err(map_todo_persistence_error)?;
        tracing::info!(todo_id = %created.id(), user_id = %created.user_id(), "todo created");
        Ok(created)
    }
}
