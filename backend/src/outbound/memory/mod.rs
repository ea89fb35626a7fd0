//! In-memory repository adapters.
//!
//! Used when no database URL is configured and by HTTP tests. They honour the
//! same contracts as the PostgreSQL adapters: ascending identifiers starting
//! at 1, unique user names, and system-managed timestamps.

mod todo_repository;
mod user_repository;

pub use todo_repository::InMemoryTodoRepository;
pub use user_repository::InMemoryUserRepository;
