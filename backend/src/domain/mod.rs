//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services implementing the driving ports. Keep types
//! immutable and document invariants and serialisation contracts (serde) in
//! each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic error payload.
//! - TraceId: per-request correlation identifier.
//! - User, Todo and their value types.
//! - Credentials / PasswordDigest: authentication inputs and stored digests.
//! - UserService, TodoService, AuthService: driving port implementations.

pub mod auth;
mod auth_service;
pub mod error;
pub mod ports;
pub mod todo;
mod todo_service;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::auth::{Credentials, CredentialsValidationError, PasswordDigest};
pub use self::auth_service::AuthService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::todo::{NewTodo, Todo, TodoId, TodoValidationError};
pub use self::todo_service::TodoService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, Age, NewUser, User, UserAccount, UserId, UserName, UserPatch, UserValidationError,
};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
