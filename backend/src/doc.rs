//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::auth::{LoginRequest, SignupRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, TodoListSchema, TodoSchema, UserListSchema, UserSchema,
};
use crate::inbound::http::todos::CreateTodoRequest;
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "Users, todos, and password-based signup and login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserListSchema,
        TodoSchema,
        TodoListSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        CreateTodoRequest,
        SignupRequest,
        LoginRequest
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "todos", description = "Todo records"),
        (name = "auth", description = "Signup and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
