//! Integration tests for to-dos and task list progress.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_to_do_starts_incomplete() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Groceries").await;

    let response = app
        .request(
            "POST",
            &format!("/api/task-lists/{id}/todos"),
            Some(serde_json::json!({ "content": "Milk" })),
            Some(&ada),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["content"], "Milk");
    assert_eq!(data["is_completed"], false);
    assert_eq!(data["task_list_id"], id.as_str());
}

#[tokio::test]
async fn test_list_to_dos_oldest_first() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Groceries").await;
    let path = format!("/api/task-lists/{id}/todos");

    for content in ["Milk", "Eggs", "Bread"] {
        let response = app
            .request(
                "POST",
                &path,
                Some(serde_json::json!({ "content": content })),
                Some(&ada),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("GET", &path, None, Some(&ada)).await;
    assert_eq!(response.status, StatusCode::OK);
    let contents: Vec<&str> = response.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["content"].as_str())
        .collect();
    assert_eq!(contents, vec!["Milk", "Eggs", "Bread"]);

    let detail = app
        .request("GET", &format!("/api/task-lists/{id}"), None, Some(&ada))
        .await;
    assert_eq!(detail.body["data"]["todo_count"], 3);
    assert_eq!(detail.body["data"]["completed_count"], 0);
    assert_eq!(detail.body["data"]["progress"], 0.0);
    assert_eq!(detail.body["data"]["todos"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_non_collaborator_cannot_touch_to_dos() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let (eve, _) = app.sign_up("Eve").await;
    let id = app.create_task_list(&ada, "Private").await;
    let path = format!("/api/task-lists/{id}/todos");

    let create = app
        .request(
            "POST",
            &path,
            Some(serde_json::json!({ "content": "Sneaky" })),
            Some(&eve),
        )
        .await;
    let list = app.request("GET", &path, None, Some(&eve)).await;

    assert_eq!(create.status, StatusCode::FORBIDDEN);
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let own = app.request("GET", &path, None, Some(&ada)).await;
    assert_eq!(own.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_to_do_requires_identity() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Groceries").await;

    let response = app
        .request(
            "POST",
            &format!("/api/task-lists/{id}/todos"),
            Some(serde_json::json!({ "content": "Milk" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_list_removes_its_to_dos() {
    let app = helpers::TestApp::new();
    let (ada, _) = app.sign_up("Ada").await;
    let id = app.create_task_list(&ada, "Groceries").await;
    let path = format!("/api/task-lists/{id}/todos");

    app.request(
        "POST",
        &path,
        Some(serde_json::json!({ "content": "Milk" })),
        Some(&ada),
    )
    .await;

    let deleted = app
        .request("DELETE", &format!("/api/task-lists/{id}"), None, Some(&ada))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app.request("GET", &path, None, Some(&ada)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
