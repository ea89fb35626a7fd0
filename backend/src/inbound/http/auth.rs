//! Authentication handlers.
//!
//! ```text
//! POST /auth/signup {"name":"test","password":"secret"}
//! POST /auth/login  {"name":"test","password":"secret"}
//! ```
//!
//! Login deliberately reports one error for every credential problem,
//! including bodies that fail to parse.

use actix_web::{post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::AUTHENTICATION_FAILED_MESSAGE;
use crate::domain::{Credentials, CredentialsValidationError, Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Request body for `POST /auth/signup`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"name": "test", "password": "secret"}))]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"name": "test", "password": "secret"}))]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

fn invalid_input(err: &CredentialsValidationError) -> Error {
    let field = match err {
        CredentialsValidationError::EmptyName => "name",
        CredentialsValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(INVALID_INPUT_MESSAGE).with_details(json!({ "field": field }))
}

/// Register a user with a password.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Created user", body = UserSchema),
        (status = 400, description = "Blank name or empty password", body = ErrorSchema),
        (status = 409, description = "User already exists", body = ErrorSchema),
        (status = 500, description = "Password could not be hashed, or internal error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signup"
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<User>> {
    let credentials = Credentials::try_from_parts(&payload.name, &payload.password)
        .map_err(|err| invalid_input(&err))?;
    Ok(web::Json(state.signup.signup(&credentials).await?))
}

/// Authenticate a user by name and password.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated user", body = UserSchema),
        (status = 400, description = "Authentication failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: Result<web::Json<LoginRequest>, actix_web::Error>,
) -> ApiResult<web::Json<User>> {
    let failed = || Error::authentication_failed(AUTHENTICATION_FAILED_MESSAGE);
    let payload = payload.map_err(|err| {
        debug!(error = %err, "login rejected: unreadable body");
        failed()
    })?;
    let credentials = Credentials::try_from_parts(&payload.name, &payload.password).map_err(|err| {
        debug!(reason = %err, "login rejected: invalid credentials");
        failed()
    })?;
    Ok(web::Json(state.login.login(&credentials).await?))
}

#[cfg(test)]
mod tests {
    //! Handler coverage over in-memory adapters and a real bcrypt hasher.
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::{init_app, memory_state};

    async fn post_json(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        uri: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let req = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let res = actix_test::call_service(app, req).await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    async fn get_json(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        uri: &str,
    ) -> (StatusCode, Value) {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(app, req).await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn signup_then_login_returns_user_without_digest() {
        let app = init_app(memory_state()).await;
        let creds = json!({ "name": "test", "password": "secret" });

        let (status, created) = post_json(&app, "/auth/signup", creds.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], "test");
        assert!(created.get("hashed_password").is_none());

        let (status, logged_in) = post_json(&app, "/auth/login", creds).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(logged_in["id"], created["id"]);
        assert!(logged_in.get("hashed_password").is_none());
    }

    #[rstest]
    #[case(json!({ "name": "", "password": "secret" }))]
    #[case(json!({ "name": "   ", "password": "secret" }))]
    #[case(json!({ "name": "test", "password": "" }))]
    #[case(json!({ "password": "secret" }))]
    #[actix_web::test]
    async fn signup_rejects_blank_input(#[case] body: Value) {
        let app = init_app(memory_state()).await;
        let (status, error) = post_json(&app, "/auth/signup", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "invalid_request");
        assert_eq!(error["message"], INVALID_INPUT_MESSAGE);
    }

    #[rstest]
    #[actix_web::test]
    async fn signup_fails_for_passwords_over_the_bcrypt_limit() {
        let app = init_app(memory_state()).await;
        let body = json!({ "name": "long", "password": "x".repeat(73) });
        let (status, error) = post_json(&app, "/auth/signup", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error["code"], "internal_error");
        assert_eq!(error["message"], "Invalid password");

        let (status, users) = get_json(&app, "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(users, json!({ "users": [] }));
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_signup_conflicts_and_keeps_original_password() {
        let app = init_app(memory_state()).await;
        let original = json!({ "name": "test", "password": "secret" });
        let (_, created) = post_json(&app, "/auth/signup", original.clone()).await;

        let (status, error) = post_json(
            &app,
            "/auth/signup",
            json!({ "name": "test", "password": "hijacked" }),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error["code"], "conflict");

        let (status, logged_in) = post_json(&app, "/auth/login", original).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(logged_in, created);

        let (status, error) = post_json(
            &app,
            "/auth/login",
            json!({ "name": "test", "password": "hijacked" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "authentication_failed");

        let (_, users) = get_json(&app, "/users").await;
        assert_eq!(users["users"].as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[actix_web::test]
    async fn login_failures_share_one_response() {
        let app = init_app(memory_state()).await;
        post_json(
            &app,
            "/auth/signup",
            json!({ "name": "test", "password": "secret" }),
        )
        .await;
        post_json(&app, "/users", json!({ "name": "nopass", "age": 1 })).await;

        let attempts = [
            json!({ "name": "test", "password": "wrong" }),
            json!({ "name": "ghost", "password": "secret" }),
            json!({ "name": "nopass", "password": "secret" }),
            json!({ "name": "", "password": "secret" }),
            json!({ "name": 5 }),
        ];
        for body in attempts {
            let (status, error) = post_json(&app, "/auth/login", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error["code"], "authentication_failed");
            assert_eq!(error["message"], AUTHENTICATION_FAILED_MESSAGE);
            assert!(error.get("details").is_none());
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn login_rejects_non_json_payloads_generically() {
        let app = init_app(memory_state()).await;
        let req = actix_test::TestRequest::post()
            .uri("/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], AUTHENTICATION_FAILED_MESSAGE);
    }
}
