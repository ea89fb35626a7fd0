//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TodoPersistenceError, TodoRepository};
use crate::domain::{NewTodo, Todo, TodoId, UserId};

use super::error_mapping::{DieselFailure, classify_diesel_error, map_basic_pool_error};
use super::models::{NewTodoRow, TodoRow};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the [`TodoRepository`] port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoPersistenceError {
    map_basic_pool_error(error, |message| TodoPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> TodoPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => TodoPersistenceError::connection(message),
        DieselFailure::UniqueViolation => TodoPersistenceError::query("database error"),
        DieselFailure::Query(message) => TodoPersistenceError::query(message),
    }
}

fn row_to_todo(row: TodoRow) -> Todo {
    Todo::new(
        TodoId::new(row.id),
        NewTodo {
            title: row.title,
            body: row.body,
            done: row.done,
            user_id: UserId::new(row.user_id),
        },
        row.created_at,
        row.updated_at,
    )
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .select(TodoRow::as_select())
            .order_by(todos::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .find(id.as_i64())
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_todo))
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTodoRow {
            title: todo.title.as_str(),
            body: todo.body.as_str(),
            done: todo.done,
            user_id: todo.user_id.as_i64(),
        };

        let row: TodoRow = diesel::insert_into(todos::table)
            .values(&new_row)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_todo(row))
    }
}
