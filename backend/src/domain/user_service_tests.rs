//! Tests for the user service.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockUserRepository;
use crate::domain::{Age, ErrorCode, UserName};

#[fixture]
fn stored() -> User {
    let at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("timestamp");
    User::new(
        UserId::new(1),
        UserName::new("test"),
        Age::new(30).expect("age"),
        at,
        at,
    )
}

fn make_service(repo: MockUserRepository) -> UserService<MockUserRepository> {
    UserService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn get_user_returns_not_found_for_absent_rows() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(UserId::new(99)))
        .times(1)
        .return_once(|_| Ok(None));

    let error = make_service(repo)
        .get_user(UserId::new(99))
        .await
        .expect_err("missing user");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), USER_NOT_FOUND_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn list_users_maps_query_failures_to_internal() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(UserPersistenceError::query("relation missing")));

    let error = make_service(repo)
        .list_users()
        .await
        .expect_err("query failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn create_user_maps_duplicate_names_to_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::duplicate_name("test")));

    let new_user = NewUser::new(UserName::new("test"), Age::default());
    let error = make_service(repo)
        .create_user(new_user)
        .await
        .expect_err("duplicate name");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn update_user_persists_merged_fields(stored: User) {
    let mut repo = MockUserRepository::new();
    let current = stored.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(current)));
    repo.expect_update()
        .withf(|user| user.name().as_ref() == "test" && user.age().get() == 31)
        .times(1)
        .returning(|user| Ok(Some(user.clone())));

    let patch = UserPatch::from_parts(None, Some(31)).expect("patch");
    let updated = make_service(repo)
        .update_user(stored.id(), patch)
        .await
        .expect("update succeeds");

    assert_eq!(updated.name().as_ref(), "test");
    assert_eq!(updated.age().get(), 31);
}

#[rstest]
#[tokio::test]
async fn update_user_with_empty_patch_skips_the_write(stored: User) {
    let mut repo = MockUserRepository::new();
    let current = stored.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(current)));
    repo.expect_update().never();

    let patch = UserPatch::from_parts(Some(String::new()), Some(0)).expect("patch");
    let updated = make_service(repo)
        .update_user(stored.id(), patch)
        .await
        .expect("no-op update succeeds");

    assert_eq!(updated, stored);
}

#[rstest]
#[tokio::test]
async fn update_user_reports_missing_rows_before_writing() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().never();

    let patch = UserPatch::from_parts(Some("new".to_owned()), None).expect("patch");
    let error = make_service(repo)
        .update_user(UserId::new(5), patch)
        .await
        .expect_err("missing user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_user_returns_last_known_state(stored: User) {
    let mut repo = MockUserRepository::new();
    let current = stored.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(current)));
    repo.expect_delete()
        .with(eq(stored.id()))
        .times(1)
        .return_once(|_| Ok(true));

    let deleted = make_service(repo)
        .delete_user(stored.id())
        .await
        .expect("delete succeeds");
    assert_eq!(deleted, stored);
}

#[rstest]
#[tokio::test]
async fn delete_user_reports_rows_removed_concurrently(stored: User) {
    let mut repo = MockUserRepository::new();
    let current = stored.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(current)));
    repo.expect_delete().times(1).return_once(|_| Ok(false));

    let error = make_service(repo)
        .delete_user(stored.id())
        .await
        .expect_err("row vanished");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
