//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users        {"name":"test","age":30}
//! PATCH  /users/{id}   {"age":31}
//! DELETE /users/{id}
//! ```
//!
//! Request bodies are bound into DTOs and copied field by field into domain
//! values, so identifiers, timestamps, and digests in a payload are ignored.

use actix_web::{delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Age, Error, NewUser, User, UserId, UserName, UserPatch, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserListSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`. Missing fields take their zero value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
}

/// Request body for `PATCH /users/{id}`.
///
/// Absent, empty, and zero fields leave the stored value unchanged.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Response envelope for `GET /users`.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request("Invalid user id")
            .with_details(json!({ "field": "id", "value": raw }))
    })
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::InvalidId => ("id", "invalid_id"),
        UserValidationError::AgeTooLarge { .. } => ("age", "age_out_of_range"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser::new(UserName::new(value.name), Age::new(value.age)?))
    }
}

impl TryFrom<UpdateUserRequest> for UserPatch {
    type Error = UserValidationError;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        UserPatch::from_parts(value.name, value.age)
    }
}

/// List every user ordered by identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = UserListSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UserListResponse>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(UserListResponse { users }))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    Ok(web::Json(state.users.get_user(id).await?))
}

/// Create a user without credentials.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let new_user = NewUser::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    Ok(web::Json(state.users_command.create_user(new_user).await?))
}

/// Partially update a user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Merged user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let patch = UserPatch::try_from(payload.into_inner()).map_err(map_user_validation_error)?;
    Ok(web::Json(state.users_command.update_user(id, patch).await?))
}

/// Delete a user, returning its last known state.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted user", body = UserSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    Ok(web::Json(state.users_command.delete_user(id).await?))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
