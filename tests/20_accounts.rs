mod common;

use anyhow::Result;
use common::{id_of, TestServer};
use reqwest::{header, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn account_lifecycle() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/accounts"))
        .json(&json!({ "email": "alice@example.com", "firstName": "Alice", "lastName": "Angler" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()[header::LOCATION].to_str()?.to_string();
    let created: Value = res.json().await?;
    let id = id_of(&created)?;
    assert_eq!(location, format!("/api/accounts/{}", id));

    let fetched: Value = server.client.get(server.url(&location)).send().await?.json().await?;
    assert_eq!(fetched["email"], "alice@example.com");
    assert_eq!(fetched["firstName"], "Alice");

    let res = server
        .client
        .put(server.url(&location))
        .json(&json!({ "email": "alice@fish.example", "firstName": "Alicia", "lastName": "Angler" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["email"], "alice@fish.example");
    assert_eq!(updated["createdDate"], created["createdDate"]);

    let res = server.client.delete(server.url(&location)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = server.client.get(server.url(&location)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.bytes().await?.is_empty());

    let res = server.client.delete(server.url(&location)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_conflict() -> Result<()> {
    let server = TestServer::start().await?;
    server.create_account("alice@example.com").await?;

    let res = server
        .client
        .post(server.url("/api/accounts"))
        .json(&json!({ "email": "ALICE@example.com", "firstName": "A", "lastName": "B" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn invalid_account_bodies_are_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/accounts"))
        .json(&json!({ "email": "not-an-email", "firstName": "", "lastName": "B" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["email"].is_string());
    assert!(body["field_errors"]["firstName"].is_string());

    let res = server
        .client
        .post(server.url("/api/accounts"))
        .header(header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn malformed_account_id_is_bad_request() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server.client.get(server.url("/api/accounts/not-a-uuid")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
