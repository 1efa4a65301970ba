//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::AppState;
use folio_auth::PasswordHasher;
use folio_core::config::{AppConfig, DatabaseBackend};
use folio_database::MemoryPhotoStore;
use folio_database::seed::sample_photos;
use folio_service::ContactService;
use folio_storage::StorageManager;
use folio_storage::providers::local::LocalStorageProvider;

/// Admin login used by every test app.
pub const ADMIN_USERNAME: &str = "denis";
/// Admin password matching the configured hash.
pub const ADMIN_PASSWORD: &str = "correct horse battery";

const BOUNDARY: &str = "folio-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state behind the router
    pub state: AppState,
    /// Media directory, removed on drop
    pub media_dir: TempDir,
}

/// Configuration for an in-memory app with a known admin account.
pub fn test_config(media_root: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = DatabaseBackend::Memory;
    config.auth.admin_username = ADMIN_USERNAME.to_string();
    config.auth.admin_password_hash = PasswordHasher::new()
        .hash_password(ADMIN_PASSWORD)
        .expect("Failed to hash admin password");
    config.auth.jwt_secret = "integration-test-secret-with-enough-length".to_string();
    config.server.rate_limit.enabled = false;
    config.storage.provider = "local".to_string();
    config.storage.local.root_path = media_root.to_string();
    config.storage.local.public_base_url = "http://localhost/media".to_string();
    config.site.base_url = "https://photos.example.com".to_string();
    config
}

impl TestApp {
    /// Create an empty test application
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application with the sample gallery loaded
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        let inserted = app
            .state
            .gallery
            .seed(&sample_photos())
            .await
            .expect("Failed to seed gallery");
        assert!(inserted > 0);
        app
    }

    /// Create a test application after adjusting the default test config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let media_dir = TempDir::new().expect("Failed to create media dir");
        let root = media_dir.path().to_string_lossy().to_string();

        let mut config = test_config(&root);
        adjust(&mut config);

        let provider = LocalStorageProvider::new(&root, &config.storage.local.public_base_url)
            .await
            .expect("Failed to init local storage");
        let storage = StorageManager::new(Arc::new(provider), &config.storage.key_prefix);
        let contact =
            ContactService::from_config(&config.contact).expect("Failed to build contact service");

        let state = AppState::new(config, Arc::new(MemoryPhotoStore::new()), storage, contact);
        let router = folio_api::build_app(state.clone());

        Self {
            router,
            state,
            media_dir,
        }
    }

    /// Login and return JWT access token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let headers: &[(&str, &str)] = &[];
        self.request_with_headers(method, path, body, token, headers)
            .await
    }

    /// Make an HTTP request with extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Post a multipart form with the given `(field, file name, content type, bytes)` parts
    pub async fn upload(
        &self,
        path: &str,
        parts: &[(&str, &str, &str, Vec<u8>)],
        token: Option<&str>,
    ) -> TestResponse {
        let mut body = Vec::new();
        for (field, file_name, content_type, data) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw: body_bytes.to_vec(),
        }
    }
}

/// Encode a solid-colour PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 80, 40]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf.into_inner()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
    /// Raw body bytes
    pub raw: Vec<u8>,
}
