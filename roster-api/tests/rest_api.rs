//! REST API integration tests for roster-api.
//!
//! Each test spawns a server on an in-memory store and talks to it over HTTP.

mod common;

use std::sync::Arc;

use roster_api::SqliteStore;
use serde_json::{Value, json};

fn alice() -> Value {
    json!({
        "name": "Alice Smith",
        "email": "alice@co.com",
        "designation": "Engineer",
        "departmentId": 1
    })
}

async fn create(server: &common::TestServer, body: &Value) -> Value {
    let response = server.post_json("/employees", body).await;
    assert_eq!(response.status(), 201);
    response.json().await.unwrap()
}

// =============================================================================
// System Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_is_running() {
    let server = common::TestServer::spawn().await;

    let response = server.get_root("/").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Employee Management API is running"
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_get_version() {
    let server = common::TestServer::spawn().await;

    let response = server.get("/version").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["version"].is_string());
    assert!(!body["version"].as_str().unwrap().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_departments() {
    let server = common::TestServer::spawn().await;

    let response = server.get("/departments").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let departments = body.as_array().unwrap();
    assert_eq!(departments.len(), 5);
    assert_eq!(departments[0], json!({ "id": 1, "name": "Engineering" }));
    assert_eq!(departments[4], json!({ "id": 5, "name": "Customer Support" }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_openapi_document() {
    let server = common::TestServer::spawn().await;

    let response = server.get_root("/api-docs/openapi.json").await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["paths"]["/api/employees"].is_object());
    assert!(body["paths"]["/api/employees/{id}"].is_object());

    server.shutdown().await;
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = common::TestServer::spawn().await;

    let response = server
        .client
        .get(format!("{}/employees", server.base_url()))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    server.shutdown().await;
}

// =============================================================================
// Employee Lifecycle
// =============================================================================

#[tokio::test]
async fn test_employee_lifecycle() {
    let server = common::TestServer::spawn().await;

    // Create
    let created = create(&server, &alice()).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Alice Smith");
    assert_eq!(created["departmentId"], 1);

    // Get returns the same record
    let response = server.get(&format!("/employees/{}", id)).await;
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update a single field
    let response = server
        .put_json(
            &format!("/employees/{}", id),
            &json!({ "designation": "Senior Engineer" }),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["designation"], "Senior Engineer");
    assert_eq!(updated["name"], "Alice Smith");
    assert_eq!(updated["email"], "alice@co.com");
    assert_eq!(updated["departmentId"], 1);

    // Delete
    let response = server.delete(&format!("/employees/{}", id)).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Employee deleted successfully");

    // Gone
    let response = server.get(&format!("/employees/{}", id)).await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Employee not found" }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_employees() {
    let server = common::TestServer::spawn().await;

    let response = server.get("/employees").await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));

    let first = create(&server, &alice()).await;
    let second = create(
        &server,
        &json!({
            "name": "Bob Jones",
            "email": "bob@co.com",
            "designation": "Account Manager",
            "departmentId": 3
        }),
    )
    .await;

    let body: Value = server.get("/employees").await.json().await.unwrap();
    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0], first);
    assert_eq!(employees[1], second);

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_trims_whitespace() {
    let server = common::TestServer::spawn().await;

    let created = create(
        &server,
        &json!({
            "name": "  Carol  ",
            "email": " carol@co.com ",
            "designation": "Recruiter ",
            "departmentId": 4
        }),
    )
    .await;
    assert_eq!(created["name"], "Carol");
    assert_eq!(created["email"], "carol@co.com");
    assert_eq!(created["designation"], "Recruiter");

    server.shutdown().await;
}

// =============================================================================
// Validation Errors
// =============================================================================

#[tokio::test]
async fn test_create_missing_field() {
    let server = common::TestServer::spawn().await;

    let response = server
        .post_json(
            "/employees",
            &json!({ "name": "Alice", "email": "alice@co.com", "designation": "Engineer" }),
        )
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "All fields are required");

    // Whitespace-only counts as missing
    let mut blank = alice();
    blank["name"] = json!("   ");
    let response = server.post_json("/employees", &blank).await;
    assert_eq!(response.status(), 400);

    // Nothing was stored
    let body: Value = server.get("/employees").await.json().await.unwrap();
    assert_eq!(body, json!([]));

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_invalid_email() {
    let server = common::TestServer::spawn().await;

    let mut body = alice();
    body["email"] = json!("not-an-email");
    let response = server.post_json("/employees", &body).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email is invalid");

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_string_department_id_is_missing() {
    let server = common::TestServer::spawn().await;

    let mut body = alice();
    body["departmentId"] = json!("3");
    let response = server.post_json("/employees", &body).await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "All fields are required" }));

    let list: Value = server.get("/employees").await.json().await.unwrap();
    assert_eq!(list, json!([]));

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = common::TestServer::spawn().await;

    let response = server.post_raw("/employees", "{\"name\": ").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_invalid_email() {
    let server = common::TestServer::spawn().await;

    let created = create(&server, &alice()).await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put_json(&format!("/employees/{}", id), &json!({ "email": "bad" }))
        .await;
    assert_eq!(response.status(), 400);

    let fetched: Value = server
        .get(&format!("/employees/{}", id))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_ignores_empty_fields() {
    let server = common::TestServer::spawn().await;

    let created = create(&server, &alice()).await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put_json(
            &format!("/employees/{}", id),
            &json!({ "name": "", "departmentId": 2 }),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "Alice Smith");
    assert_eq!(updated["departmentId"], 2);

    server.shutdown().await;
}

// =============================================================================
// Identifier Errors
// =============================================================================

#[tokio::test]
async fn test_invalid_id() {
    let server = common::TestServer::spawn().await;

    let response = server.get("/employees/abc").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Invalid ID" }));

    let response = server
        .put_json("/employees/abc", &json!({ "name": "X" }))
        .await;
    assert_eq!(response.status(), 400);

    let response = server.delete("/employees/abc").await;
    assert_eq!(response.status(), 400);

    // Undecodable path segment still answers with a JSON message
    let response = server.get("/employees/%FF").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Invalid ID" }));

    let response = server
        .put_json("/employees/%FF", &json!({ "name": "X" }))
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Invalid ID" }));

    let response = server.delete("/employees/%FF").await;
    assert_eq!(response.status(), 400);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_id() {
    let server = common::TestServer::spawn().await;

    let response = server.get("/employees/999").await;
    assert_eq!(response.status(), 404);

    let response = server
        .put_json("/employees/999", &json!({ "name": "X" }))
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Employee not found");

    let response = server.delete("/employees/999").await;
    assert_eq!(response.status(), 404);

    server.shutdown().await;
}

#[tokio::test]
async fn test_deleted_id_not_reused() {
    let server = common::TestServer::spawn().await;

    let first = create(&server, &alice()).await;
    let first_id = first["id"].as_i64().unwrap();
    let response = server.delete(&format!("/employees/{}", first_id)).await;
    assert_eq!(response.status(), 200);

    let second = create(&server, &alice()).await;
    assert_ne!(second["id"].as_i64().unwrap(), first_id);

    server.shutdown().await;
}

// =============================================================================
// Store Failures
// =============================================================================

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());
    let server = common::TestServer::spawn_with_store(store.clone()).await;
    store.close().await;

    let response = server.get("/employees").await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Server error" }));

    let response = server.post_json("/employees", &alice()).await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Server error" }));

    server.shutdown().await;
}
