//! Todos API handlers.
//!
//! ```text
//! GET  /todos
//! GET  /todos/{id}
//! POST /todos  {"title":"t","body":"b","done":false,"user_id":1}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, NewTodo, Todo, TodoId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TodoListSchema, TodoSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /todos`. Missing fields take their zero value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub user_id: i64,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(value: CreateTodoRequest) -> Self {
        Self {
            title: value.title,
            body: value.body,
            done: value.done,
            user_id: UserId::new(value.user_id),
        }
    }
}

/// Response envelope for `GET /todos`.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

fn parse_todo_id(raw: &str) -> Result<TodoId, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request("Invalid todo id")
            .with_details(json!({ "field": "id", "value": raw }))
    })
}

/// List every todo ordered by identifier.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos", body = TodoListSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<TodoListResponse>> {
    let todos = state.todos.list_todos().await?;
    Ok(web::Json(TodoListResponse { todos }))
}

/// Fetch one todo.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Todo", body = TodoSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Todo not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Todo>> {
    let id = parse_todo_id(&path)?;
    Ok(web::Json(state.todos.get_todo(id).await?))
}

/// Create a todo. The referenced user is not checked.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Created todo", body = TodoSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<web::Json<Todo>> {
    let todo = NewTodo::from(payload.into_inner());
    Ok(web::Json(state.todos_command.create_todo(todo).await?))
}
