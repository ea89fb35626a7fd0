//! Tests for users API handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::test_utils::{init_app, memory_state};

async fn send(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("json payload");
    (status, value)
}

fn create(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/users").set_json(body)
}

#[rstest]
#[actix_web::test]
async fn create_ignores_client_supplied_identity_and_digest() {
    let app = init_app(memory_state()).await;
    let (status, user) = send(
        &app,
        create(json!({
            "id": 999,
            "name": "test",
            "age": 30,
            "hashed_password": "$2b$04$injected",
            "created_at": "1999-01-01T00:00:00Z"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "test");
    assert_eq!(user["age"], 30);
    assert!(user.get("hashed_password").is_none());
    assert_ne!(user["created_at"], "1999-01-01T00:00:00Z");
}

#[rstest]
#[actix_web::test]
async fn create_reports_ages_beyond_store_range() {
    let app = init_app(memory_state()).await;
    let (status, error) = send(
        &app,
        create(json!({ "name": "big", "age": 4_000_000_000_u64 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["details"]["field"], "age");
    assert_eq!(error["details"]["code"], "age_out_of_range");
}

#[rstest]
#[case(json!({ "name": "   ", "age": 3 }), "   ")]
#[case(json!({ "age": 3 }), "")]
#[actix_web::test]
async fn create_stores_names_verbatim(#[case] body: Value, #[case] stored: &str) {
    let app = init_app(memory_state()).await;
    let (status, user) = send(&app, create(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], stored);
}

#[rstest]
#[actix_web::test]
async fn patch_overwrites_with_whitespace_only_name() {
    let app = init_app(memory_state()).await;
    send(&app, create(json!({ "name": "test", "age": 30 }))).await;

    let (status, patched) = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/users/1")
            .set_json(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "   ");
    assert_eq!(patched["age"], 30);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_malformed_bodies_with_envelope() {
    let app = init_app(memory_state()).await;
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "x", "age": "old"}"#);
    let (status, error) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "invalid_request");
    assert!(error["details"]["reason"].is_string());
}

#[rstest]
#[actix_web::test]
async fn duplicate_names_conflict() {
    let app = init_app(memory_state()).await;
    send(&app, create(json!({ "name": "test", "age": 1 }))).await;
    let (status, error) = send(&app, create(json!({ "name": "test", "age": 2 }))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["message"], "User already exists");
}

#[rstest]
#[case("/users/abc", StatusCode::BAD_REQUEST)]
#[case("/users/1.5", StatusCode::BAD_REQUEST)]
#[case("/users/0", StatusCode::NOT_FOUND)]
#[case("/users/-1", StatusCode::NOT_FOUND)]
#[case("/users/77", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn get_user_distinguishes_bad_and_absent_ids(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let app = init_app(memory_state()).await;
    let (status, _) = send(&app, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, expected);
}

#[rstest]
#[actix_web::test]
async fn patch_merges_only_non_empty_fields() {
    let app = init_app(memory_state()).await;
    let (_, created) = send(&app, create(json!({ "name": "test", "age": 30 }))).await;

    let (status, patched) = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/users/1")
            .set_json(json!({ "name": "", "age": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "test");
    assert_eq!(patched["age"], 31);
    assert_eq!(patched["created_at"], created["created_at"]);

    let (status, unchanged) = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/users/1")
            .set_json(json!({ "name": "", "age": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, patched);
}

#[rstest]
#[actix_web::test]
async fn patch_missing_user_is_not_found() {
    let app = init_app(memory_state()).await;
    let (status, error) = send(
        &app,
        actix_test::TestRequest::patch()
            .uri("/users/9")
            .set_json(json!({ "age": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn delete_returns_last_state_then_forgets_user() {
    let app = init_app(memory_state()).await;
    send(&app, create(json!({ "name": "test", "age": 30 }))).await;

    let (status, deleted) = send(&app, actix_test::TestRequest::delete().uri("/users/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], "test");

    let (status, _) = send(&app, actix_test::TestRequest::get().uri("/users/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, actix_test::TestRequest::delete().uri("/users/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_users_returns_empty_envelope() {
    let app = init_app(memory_state()).await;
    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));
}

#[rstest]
fn parse_user_id_reports_raw_value() {
    let error = parse_user_id("x1").expect_err("not an integer");
    assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
    assert_eq!(error.details(), Some(&json!({ "field": "id", "value": "x1" })));
}
