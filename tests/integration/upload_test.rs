//! Integration tests for image uploads and local media serving.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_upload_requires_admin() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "a.png", "image/png", helpers::png_bytes(8, 8))],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_stores_jpeg_and_serves_it() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "Sea View.png", "image/png", helpers::png_bytes(40, 30))],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["width"], 40);
    assert_eq!(data["height"], 30);

    let url = data["url"].as_str().unwrap();
    assert!(url.starts_with("http://localhost/media/gallery/"));
    assert!(url.ends_with(".jpg"));

    let path = url.trim_start_matches("http://localhost");
    let served = app.request("GET", path, None, None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(&served.raw[..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn test_upload_downscales_large_images() {
    let app = helpers::TestApp::with_config(|c| {
        c.storage.upload.max_width = 100;
        c.storage.upload.max_height = 100;
    })
    .await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "wide.png", "image/png", helpers::png_bytes(400, 200))],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["width"], 100);
    assert_eq!(response.body["data"]["height"], 50);
}

#[tokio::test]
async fn test_upload_rejects_wrong_type() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "notes.txt", "text/plain", b"hello".to_vec())],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["message"],
        "Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed."
    );
}

#[tokio::test]
async fn test_upload_rejects_undecodable_image() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "broken.jpg", "image/jpeg", b"not really a jpeg".to_vec())],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "INVALID_IMAGE");
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let app = helpers::TestApp::with_config(|c| c.storage.upload.max_bytes = 1024 * 1024).await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("file", "big.jpg", "image/jpeg", vec![0u8; 1024 * 1024 + 1])],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["message"],
        "File too large. Maximum size is 1MB."
    );
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload",
            &[("other", "a.png", "image/png", helpers::png_bytes(4, 4))],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["message"], "No file provided");
}

#[tokio::test]
async fn test_batch_upload_reports_each_file() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload(
            "/api/admin/upload/batch",
            &[
                ("files", "one.png", "image/png", helpers::png_bytes(10, 10)),
                ("files", "two.txt", "text/plain", b"nope".to_vec()),
                ("files", "three.png", "image/png", helpers::png_bytes(12, 12)),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["succeeded"], 2);
    assert_eq!(data["failed"], 1);

    let results = data["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["file_name"], "one.png");
    assert_eq!(results[1]["success"], false);
    assert!(results[1]["error"].is_string());
    assert!(results[2]["url"].is_string());
}

#[tokio::test]
async fn test_batch_upload_limits_file_count() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let png = helpers::png_bytes(2, 2);
    let parts: Vec<(&str, &str, &str, Vec<u8>)> = (0..11)
        .map(|_| ("files", "x.png", "image/png", png.clone()))
        .collect();

    let response = app
        .upload("/api/admin/upload/batch", &parts, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["message"],
        "Too many files. Maximum is 10 per upload."
    );
}

#[tokio::test]
async fn test_batch_upload_requires_files() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload("/api/admin/upload/batch", &[], Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["message"], "No files provided");
}
