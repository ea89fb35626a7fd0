//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror their serialised shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Login failed; no detail about which credential was wrong.
    #[schema(rename = "authentication_failed")]
    AuthenticationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Unique user name.
    #[schema(example = "test")]
    name: String,
    /// Non-negative age.
    #[schema(example = 30, minimum = 0)]
    age: u32,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// Last modification timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::Todo`].
#[derive(ToSchema)]
#[schema(as = Todo)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TodoSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Title text.
    title: String,
    /// Body text.
    body: String,
    /// Completion flag.
    done: bool,
    /// Owning user; not checked against the users table.
    #[schema(example = 1)]
    user_id: i64,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// Last modification timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for the `GET /users` envelope.
#[derive(ToSchema)]
#[schema(as = UserList)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserListSchema {
    users: Vec<UserSchema>,
}

/// OpenAPI schema for the `GET /todos` envelope.
#[derive(ToSchema)]
#[schema(as = TodoList)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TodoListSchema {
    todos: Vec<TodoSchema>,
}
