//! Integration tests for task list access control.

mod helpers;

use axum::http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};

#[tokio::test]
async fn test_create_without_token_creates_nothing() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/task-lists",
            Some(serde_json::json!({ "title": "X" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION_REQUIRED");

    let (token, _) = app.sign_up("Ada").await;
    let lists = app.request("GET", "/api/task-lists", None, Some(&token)).await;
    assert_eq!(lists.status, StatusCode::OK);
    assert_eq!(lists.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_then_get() {
    let app = helpers::TestApp::new();
    let (token, user_id) = app.sign_up("Ada").await;
    let id = app.create_task_list(&token, "X").await;

    let response = app
        .request("GET", &format!("/api/task-lists/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"], "X");
    assert_eq!(data["collaborators"], serde_json::json!([user_id]));
    assert_eq!(data["progress"], 0.0);
    assert_eq!(data["todos"], serde_json::json!([]));
}

#[tokio::test]
async fn test_my_task_lists_only_lists_memberships() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let (bob, _) = app.sign_up("Bob").await;

    let first = app.create_task_list(&ada, "First").await;
    let second = app.create_task_list(&ada, "Second").await;
    app.create_task_list(&bob, "Bob's").await;

    let response = app.request("GET", "/api/task-lists", None, Some(&ada)).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|l| l["id"].as_str())
        .collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[tokio::test]
async fn test_add_collaborator_twice_is_idempotent() {
    let app = helpers::TestApp::new();
    let (ada, ada_id) = app.sign_up("Ada").await;
    let (bob, bob_id) = app.sign_up("Bob").await;
    let id = app.create_task_list(&ada, "Shared").await;
    let path = format!("/api/task-lists/{id}/collaborators");
    let body = serde_json::json!({ "user_id": bob_id });

    let first = app.request("POST", &path, Some(body.clone()), Some(&ada)).await;
    let second = app.request("POST", &path, Some(body), Some(&ada)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(
        second.body["data"]["collaborators"],
        serde_json::json!([ada_id, bob_id])
    );

    // Bob now sees and can read the list.
    let bobs = app.request("GET", "/api/task-lists", None, Some(&bob)).await;
    assert_eq!(bobs.body["data"].as_array().map(Vec::len), Some(1));
    let get = app
        .request("GET", &format!("/api/task-lists/{id}"), None, Some(&bob))
        .await;
    assert_eq!(get.status, StatusCode::OK);
}

#[tokio::test]
async fn test_add_unknown_user_is_not_found() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Shared").await;

    let response = app
        .request(
            "POST",
            &format!("/api/task-lists/{id}/collaborators"),
            Some(serde_json::json!({ "user_id": uuid::Uuid::new_v4() })),
            Some(&ada),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_collaborator_is_forbidden() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let (eve, eve_id) = app.sign_up("Eve").await;
    let id = app.create_task_list(&ada, "Private").await;
    let path = format!("/api/task-lists/{id}");

    let get = app.request("GET", &path, None, Some(&eve)).await;
    let update = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "title": "Mine now" })),
            Some(&eve),
        )
        .await;
    let add = app
        .request(
            "POST",
            &format!("{path}/collaborators"),
            Some(serde_json::json!({ "user_id": eve_id })),
            Some(&eve),
        )
        .await;
    let delete = app.request("DELETE", &path, None, Some(&eve)).await;

    for response in [&get, &update, &add, &delete] {
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{:?}", response.body);
        assert_eq!(response.body["error"], "FORBIDDEN");
    }

    let still_there = app.request("GET", &path, None, Some(&ada)).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["data"]["title"], "Private");
}

#[tokio::test]
async fn test_missing_list_and_bad_id() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;

    let missing = app
        .request(
            "GET",
            &format!("/api/task-lists/{}", uuid::Uuid::new_v4()),
            None,
            Some(&ada),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad = app
        .request("GET", "/api/task-lists/not-a-uuid", None, Some(&ada))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Old").await;
    let path = format!("/api/task-lists/{id}");

    let updated = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "title": "New" })),
            Some(&ada),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["title"], "New");

    let deleted = app.request("DELETE", &path, None, Some(&ada)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&ada)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_title_is_rejected() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;

    let response = app
        .request(
            "POST",
            "/api/task-lists",
            Some(serde_json::json!({ "title": "   " })),
            Some(&ada),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_expired_token_is_anonymous() {
    let app = helpers::TestApp::new();
    let (_, user_id) = app.sign_up("Ada").await;

    let past = chrono::Utc::now().timestamp() - 3600;
    let token = encode(
        &Header::default(),
        &serde_json::json!({ "sub": user_id, "iat": past - 60, "exp": past }),
        &EncodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
    )
    .expect("encode");

    let response = app
        .request(
            "POST",
            "/api/task-lists",
            Some(serde_json::json!({ "title": "X" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION_REQUIRED");
}

#[tokio::test]
async fn test_identity_is_checked_before_input() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Groceries").await;

    let blank_title = app
        .request(
            "POST",
            "/api/task-lists",
            Some(serde_json::json!({ "title": "" })),
            None,
        )
        .await;
    let bad_id = app
        .request("GET", "/api/task-lists/not-a-uuid", None, None)
        .await;
    let bad_collaborator = app
        .request(
            "POST",
            &format!("/api/task-lists/{id}/collaborators"),
            Some(serde_json::json!({ "user_id": "x" })),
            None,
        )
        .await;
    let blank_to_do = app
        .request(
            "POST",
            "/api/task-lists/not-a-uuid/todos",
            Some(serde_json::json!({ "content": "" })),
            None,
        )
        .await;

    for response in [&blank_title, &bad_id, &bad_collaborator, &blank_to_do] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{:?}", response.body);
        assert_eq!(response.body["error"], "AUTHENTICATION_REQUIRED");
    }
}
