//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, SignupService, TodosCommand, TodosQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub todos: Arc<dyn TodosQuery>,
    pub todos_command: Arc<dyn TodosCommand>,
    pub login: Arc<dyn LoginService>,
    pub signup: Arc<dyn SignupService>,
}

impl HttpState {
    /// Build state from services that implement both halves of a use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{AuthService, TodoService, UserService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::{InMemoryTodoRepository, InMemoryUserRepository};
    /// use backend::outbound::security::BcryptPasswordHasher;
    ///
    /// let users = Arc::new(InMemoryUserRepository::new());
    /// let state = HttpState::from_services(
    ///     Arc::new(UserService::new(users.clone())),
    ///     Arc::new(TodoService::new(Arc::new(InMemoryTodoRepository::new()))),
    ///     Arc::new(AuthService::new(users, Arc::new(BcryptPasswordHasher::default()))),
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn from_services<U, T, A>(users: Arc<U>, todos: Arc<T>, auth: Arc<A>) -> Self
    where
        U: UsersQuery + UsersCommand + 'static,
        T: TodosQuery + TodosCommand + 'static,
        A: LoginService + SignupService + 'static,
    {
        Self {
            users: users.clone(),
            users_command: users,
            todos: todos.clone(),
            todos_command: todos,
            login: auth.clone(),
            signup: auth,
        }
    }
}
