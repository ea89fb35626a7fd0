//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use backend::domain::ports::{PasswordHasher, TodoRepository, UserRepository};
use backend::domain::{AuthService, TodoService, UserService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryTodoRepository, InMemoryUserRepository};
use backend::outbound::persistence::{DieselTodoRepository, DieselUserRepository};

use super::ServerConfig;

/// Compose services over one user store, one todo store, and a hasher.
///
/// Signup, login, and the user endpoints share the same user repository so
/// accounts created by one are visible to the others.
fn state_from_repositories<U, T, H>(users: Arc<U>, todos: Arc<T>, hasher: Arc<H>) -> HttpState
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
    H: PasswordHasher + 'static,
{
    HttpState::from_services(
        Arc::new(UserService::new(users.clone())),
        Arc::new(TodoService::new(todos)),
        Arc::new(AuthService::new(users, hasher)),
    )
}

/// Build HTTP state from configuration.
///
/// Uses Diesel repositories when a pool is configured and in-memory
/// repositories otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let hasher = Arc::new(config.hasher);
    match &config.db_pool {
        Some(pool) => state_from_repositories(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselTodoRepository::new(pool.clone())),
            hasher,
        ),
        None => state_from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTodoRepository::new()),
            hasher,
        ),
    }
}
