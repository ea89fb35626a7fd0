//! Mutex-guarded in-memory `TodoRepository`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{TodoPersistenceError, TodoRepository};
use crate::domain::{NewTodo, Todo, TodoId};

#[derive(Default)]
struct TodoTable {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// In-memory todo store keyed by identifier.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    table: Mutex<TodoTable>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, TodoTable>, TodoPersistenceError> {
        self.table
            .lock()
            .map_err(|_| TodoPersistenceError::query("todo store lock poisoned"))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoPersistenceError> {
        Ok(self.lock()?.rows.get(&id.as_i64()).cloned())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError> {
        let mut table = self.lock()?;
        table.last_id += 1;
        let id = table.last_id;
        let now = Utc::now();
        let stored = Todo::new(TodoId::new(id), todo.clone(), now, now);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let repo = InMemoryTodoRepository::new();
        let created = repo
            .insert(&NewTodo {
                title: "t".to_owned(),
                body: "b".to_owned(),
                done: false,
                user_id: UserId::new(77),
            })
            .await
            .expect("insert");

        let fetched = repo
            .find_by_id(created.id())
            .await
            .expect("lookup")
            .expect("todo exists");
        assert_eq!(fetched, created);
        assert_eq!(repo.find_by_id(TodoId::new(-1)).await.expect("lookup"), None);
    }
}
