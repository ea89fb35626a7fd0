//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use crate::Trace;
use crate::domain::{AuthService, TodoService, UserService};
use crate::inbound::http::json::json_config;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryTodoRepository, InMemoryUserRepository};
use crate::outbound::security::{BcryptPasswordHasher, MIN_BCRYPT_COST};

/// Build handler state over fresh in-memory repositories.
///
/// Uses the cheapest bcrypt cost so credential tests stay fast.
pub fn memory_state() -> HttpState {
    let users = Arc::new(InMemoryUserRepository::new());
    let todos = Arc::new(InMemoryTodoRepository::new());
    let hasher = BcryptPasswordHasher::new(MIN_BCRYPT_COST).expect("minimum cost is valid");
    HttpState::from_services(
        Arc::new(UserService::new(users.clone())),
        Arc::new(TodoService::new(todos)),
        Arc::new(AuthService::new(users, Arc::new(hasher))),
    )
}

/// Initialise a test service with every REST endpoint mounted.
pub async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(super::configure),
    )
    .await
}
