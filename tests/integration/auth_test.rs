//! Integration tests for admin authentication.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::ADMIN_USERNAME,
                "password": helpers::ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["data"]["access_token"].as_str().is_some());
    assert_eq!(response.body["data"]["token_type"], "Bearer");
    assert!(response.body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::ADMIN_USERNAME,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_wrong_username_has_same_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": helpers::ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_disabled_without_password_hash() {
    let app = helpers::TestApp::with_config(|c| c.auth.admin_password_hash.clear()).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::ADMIN_USERNAME,
                "password": helpers::ADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_admin_route_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/admin/photos", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "UNAUTHORIZED");
    assert!(response.body["error"]["hint"].is_string());
}

#[tokio::test]
async fn test_admin_route_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/admin/photos", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let before = app
        .request("GET", "/api/admin/photos", None, Some(&token))
        .await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["data"]["message"], "Logged out successfully");

    let after = app
        .request("GET", "/api/admin/photos", None, Some(&token))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_is_rate_limited() {
    let app = helpers::TestApp::with_config(|c| {
        c.server.rate_limit.enabled = true;
        c.server.rate_limit.burst = 2;
        c.server.rate_limit.per_minute = 1;
    })
    .await;

    let attempt = serde_json::json!({ "username": "x", "password": "y" });
    for _ in 0..2 {
        let response = app
            .request("POST", "/api/auth/login", Some(attempt.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let limited = app
        .request("POST", "/api/auth/login", Some(attempt), None)
        .await;
    assert_eq!(limited.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(limited.body["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_forged_token_rejected_when_login_disabled() {
    let app = helpers::TestApp::with_config(|c| c.auth.admin_password_hash.clear()).await;

    // Signed with the server's own secret, so only the missing account stops it.
    let forged = folio_auth::JwtEncoder::new(&app.state.config.auth)
        .issue("attacker")
        .expect("Failed to sign token");

    let list = app
        .request("GET", "/api/admin/photos", None, Some(&forged.token))
        .await;
    assert_eq!(list.status, StatusCode::SERVICE_UNAVAILABLE);

    let create = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(serde_json::json!({
                "title": "Injected",
                "category": "Urban",
                "src": "https://cdn.example.com/x.jpg",
            })),
            Some(&forged.token),
        )
        .await;
    assert_eq!(create.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_server_refuses_placeholder_jwt_secret() {
    let media = tempfile::TempDir::new().expect("Failed to create media dir");
    let mut config = helpers::test_config(&media.path().to_string_lossy());
    config.auth.jwt_secret = folio_core::config::DEFAULT_JWT_SECRET.to_string();

    let err = folio_api::build_state(config)
        .await
        .err()
        .expect("placeholder secret must be refused");
    assert_eq!(err.kind, folio_core::ErrorKind::Configuration);
    assert!(err.message.contains("jwt_secret"));
}

#[tokio::test]
async fn test_server_accepts_placeholder_secret_when_allowed() {
    let media = tempfile::TempDir::new().expect("Failed to create media dir");
    let mut config = helpers::test_config(&media.path().to_string_lossy());
    config.auth.jwt_secret = folio_core::config::DEFAULT_JWT_SECRET.to_string();
    config.auth.allow_insecure_secret = true;

    assert!(folio_api::build_state(config).await.is_ok());
}

#[tokio::test]
async fn test_rotating_forwarded_for_does_not_bypass_rate_limit() {
    let app = helpers::TestApp::with_config(|c| {
        c.server.rate_limit.enabled = true;
        c.server.rate_limit.burst = 2;
        c.server.rate_limit.per_minute = 1;
    })
    .await;

    let attempt = serde_json::json!({ "username": "x", "password": "y" });
    let mut limited = 0;
    for i in 0..20 {
        let forwarded = format!("10.0.0.{i}");
        let response = app
            .request_with_headers(
                "POST",
                "/api/auth/login",
                Some(attempt.clone()),
                None,
                &[("X-Forwarded-For", forwarded.as_str())],
            )
            .await;
        if response.status == StatusCode::TOO_MANY_REQUESTS {
            limited += 1;
        }
    }

    assert_eq!(limited, 18);
}
