//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod password_hasher;
mod signup_service;
mod todo_repository;
mod todos_command;
mod todos_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{AUTHENTICATION_FAILED_MESSAGE, LoginService};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{CredentialError, PasswordHasher};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoPersistenceError, TodoRepository};
#[cfg(test)]
pub use todos_command::MockTodosCommand;
pub use todos_command::TodosCommand;
#[cfg(test)]
pub use todos_query::MockTodosQuery;
pub use todos_query::TodosQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
