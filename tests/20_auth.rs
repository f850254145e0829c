mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_login_and_reach_protected_route() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    let token = common::register_and_login(server, "alice", "wonderland").await?;

    let res = reqwest::Client::new()
        .get(server.url("/protected"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["msg"], "Hello, alice. This is a protected route");
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_is_rejected() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    let client = reqwest::Client::new();
    let payload = json!({ "username": "bob", "password": "builder" });

    let first = client.post(server.url("/register")).json(&payload).send().await?;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.json::<Value>().await?["msg"], "User registered");

    let second = client.post(server.url("/register")).json(&payload).send().await?;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(second.json::<Value>().await?["message"], "User already exists");
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    common::register_and_login(server, "carol", "correct-horse").await?;

    let res = reqwest::Client::new()
        .post(server.url("/login"))
        .form(&[("username", "carol"), ("password", "battery-staple")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?["message"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn login_response_describes_token() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    common::register_and_login(server, "dave", "pw").await?;

    let body = reqwest::Client::new()
        .post(server.url("/login"))
        .form(&[("username", "dave"), ("password", "pw")])
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 30 * 60);
    assert!(body["access_token"].as_str().is_some_and(|t| t.split('.').count() == 3));
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_missing_and_invalid_tokens() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/protected")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers()["www-authenticate"], "Bearer");
    assert_eq!(res.json::<Value>().await?["message"], "Not authenticated");

    let res = client
        .get(server.url("/protected"))
        .bearer_auth("invalidtoken")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await?["message"], "Invalid token");
    Ok(())
}

#[tokio::test]
async fn blank_username_is_a_validation_error() -> Result<()> {
    let server = common::ensure_algorithms_server().await?;
    let res = reqwest::Client::new()
        .post(server.url("/register"))
        .json(&json!({ "username": "   ", "password": "pw" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("username").is_some(), "{}", body);
    Ok(())
}
