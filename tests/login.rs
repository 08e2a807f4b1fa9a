//! Tests for POST /token and the public endpoints.

use axum::http::StatusCode;

mod common;
use common::*;

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = test_app();

    let (status, json, _) = send(&app, login_request("admin_user", "admin_password")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["token_type"], "bearer");
    assert!(json["access_token"].as_str().unwrap().starts_with("rbac_"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app();

    let (bad_pw_status, bad_pw_body, bad_pw_headers) =
        send(&app, login_request("admin_user", "wrong")).await;
    let (no_user_status, no_user_body, _) =
        send(&app, login_request("ghost", "admin_password")).await;

    assert_eq!(bad_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_user_status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_pw_body, no_user_body);
    assert_eq!(bad_pw_headers.get("www-authenticate").unwrap(), "Bearer");
}

#[tokio::test]
async fn test_repeated_logins_yield_independent_sessions() {
    let app = test_app();

    let first = login(&app, "normal_user", "user_password").await;
    let second = login(&app, "normal_user", "user_password").await;
    assert_ne!(first, second);

    for token in [&first, &second] {
        let (status, json, _) = send(&app, authed("GET", "/me", token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["username"], "normal_user");
    }
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let app = test_app();

    let (status, json, _) = send(&app, anonymous("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Welcome to the RBAC Demo API!");

    let (status, json, _) = send(&app, anonymous("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_me_lists_roles_and_expanded_permissions() {
    let app = test_app();
    let token = login(&app, "developer_user", "dev_password").await;

    let (status, json, _) = send(&app, authed("GET", "/me", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["roles"], serde_json::json!(["developer"]));
    assert_eq!(
        json["permissions"],
        serde_json::json!(["read_users", "read_products", "access_dev_tools", "view_logs"])
    );
}

#[tokio::test]
async fn test_malformed_login_body_uses_detail_shape() {
    let app = test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/token")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let (status, json, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].is_string(), "got: {json}");
}

#[tokio::test]
async fn test_login_without_json_content_type_is_rejected() {
    let app = test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/token")
        .body(axum::body::Body::from(r#"{"username":"a","password":"b"}"#))
        .unwrap();
    let (status, json, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(json["detail"].is_string(), "got: {json}");
}
