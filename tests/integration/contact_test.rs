//! Integration tests for the contact form.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_contact_submission_accepted() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(json!({
                "name": "Dana",
                "email": "dana@example.com",
                "phone": "+972 50 000 0000",
                "projectType": "realEstate",
                "message": "We'd like photos of a new apartment.",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body.get("error").is_none());
}

#[tokio::test]
async fn test_contact_requires_name_email_and_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(json!({ "name": "  ", "email": "dana@example.com", "message": "Hi" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(
        response.body["error"],
        "Name, email, and message are required"
    );
}

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(json!({ "name": "Dana", "email": "not-an-email", "message": "Hi" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid email address");
}

#[tokio::test]
async fn test_contact_delivery_failure_is_reported() {
    let app = helpers::TestApp::with_config(|c| {
        c.contact.resend_api_key = "re_test_key".to_string();
        c.contact.api_base_url = "http://127.0.0.1:9".to_string();
        c.contact.timeout_seconds = 2;
    })
    .await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(json!({ "name": "Dana", "email": "dana@example.com", "message": "Hi" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Failed to send message");
}

#[tokio::test]
async fn test_contact_is_rate_limited() {
    let app = helpers::TestApp::with_config(|c| {
        c.server.rate_limit.enabled = true;
        c.server.rate_limit.burst = 1;
        c.server.rate_limit.per_minute = 1;
    })
    .await;

    let form = json!({ "name": "Dana", "email": "dana@example.com", "message": "Hi" });
    let first = app
        .request("POST", "/api/contact", Some(form.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", "/api/contact", Some(form), None).await;
    assert_eq!(second.status, StatusCode::TOO_MANY_REQUESTS);
}
