//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod json;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod todos;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every REST endpoint on `cfg`.
///
/// Health probes are registered separately because they depend on
/// [`health::HealthState`] rather than [`state::HttpState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(todos::list_todos)
        .service(todos::get_todo)
        .service(todos::create_todo)
        .service(auth::signup)
        .service(auth::login);
}
