//! Integration tests for the public gallery.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_gallery_lists_visible_photos_newest_first() {
    let app = helpers::TestApp::seeded().await;

    let response = app.request("GET", "/api/gallery", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    let items = page["items"].as_array().unwrap();
    assert_eq!(page["total"], 12);
    assert_eq!(items.len(), 12);
    assert_eq!(page["has_more"], false);

    let positions: Vec<i64> = items.iter().map(|p| p["position"].as_i64().unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] > w[1]));
    assert!(items.iter().all(|p| p["slug"].as_str().is_some_and(|s| !s.is_empty())));
}

#[tokio::test]
async fn test_gallery_pages_with_offset_and_limit() {
    let app = helpers::TestApp::seeded().await;

    let first = app
        .request("GET", "/api/gallery?offset=0&limit=5", None, None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(first.body["data"]["has_more"], true);
    assert_eq!(first.body["data"]["next_offset"], 5);

    let last = app
        .request("GET", "/api/gallery?offset=10&limit=5", None, None)
        .await;
    assert_eq!(last.body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(last.body["data"]["has_more"], false);
    assert!(last.body["data"]["next_offset"].is_null());
}

#[tokio::test]
async fn test_gallery_filters_by_category() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .request("GET", "/api/gallery?category=landscape", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| p["category"] == "Landscape"));
}

#[tokio::test]
async fn test_gallery_rejects_unknown_category() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .request("GET", "/api/gallery?category=food", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_gallery_has_no_hero() {
    let app = helpers::TestApp::new().await;

    let list = app.request("GET", "/api/gallery", None, None).await;
    assert_eq!(list.body["data"]["total"], 0);

    let hero = app.request("GET", "/api/gallery/hero", None, None).await;
    assert_eq!(hero.status, StatusCode::OK);
    assert!(hero.body["data"].is_null());
}

#[tokio::test]
async fn test_hero_is_eligible_and_visible() {
    let app = helpers::TestApp::seeded().await;

    let response = app.request("GET", "/api/gallery/hero", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["hero_eligible"], true);
    assert_eq!(response.body["data"]["hidden"], false);
}

#[tokio::test]
async fn test_photo_detail_by_slug_with_related() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .request("GET", "/api/gallery/photos/mountain-sunrise", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let photo = &response.body["data"]["photo"];
    assert_eq!(photo["title"], "Mountain Sunrise");
    assert_eq!(photo["slug"], "mountain-sunrise");

    let related = response.body["data"]["related"].as_array().unwrap();
    assert!(!related.is_empty());
    assert!(related.len() <= 3);
    assert!(related.iter().all(|p| p["category"] == photo["category"]));
    assert!(related.iter().all(|p| p["id"] != photo["id"]));
}

/// Percent-encode every non-ASCII byte of a path segment.
fn encode_segment(segment: &str) -> String {
    segment
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'-' {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

#[tokio::test]
async fn test_photo_detail_resolves_hebrew_title() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(serde_json::json!({
                "title": "שקיעה בים",
                "category": "Nature",
                "src": "https://cdn.example.com/sunset.jpg",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let path = format!("/api/gallery/photos/{}", encode_segment("שקיעה-בים"));
    let response = app.request("GET", &path, None, None).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["photo"]["slug"], "שקיעה-בים");
}

#[tokio::test]
async fn test_photo_detail_unknown_slug_is_not_found() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .request("GET", "/api/gallery/photos/no-such-photo", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "NOT_FOUND");
    assert_eq!(
        response.body["error"]["message"],
        "Photo 'no-such-photo' not found"
    );
}

#[tokio::test]
async fn test_categories_in_hebrew_are_rtl() {
    let app = helpers::TestApp::seeded().await;

    let response = app
        .request("GET", "/api/gallery/categories?locale=he", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["locale"], "he");
    assert_eq!(data["rtl"], true);
    let categories = data["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["value"], "Landscape");
    assert_eq!(categories[0]["label"], "נוף");

    let total: u64 = categories.iter().map(|c| c["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 12);
}

#[tokio::test]
async fn test_categories_fall_back_to_site_default_locale() {
    let app = helpers::TestApp::seeded().await;

    let english = app
        .request("GET", "/api/gallery/categories?locale=en", None, None)
        .await;
    assert_eq!(english.body["data"]["rtl"], false);
    assert_eq!(english.body["data"]["categories"][0]["label"], "Landscape");

    let unknown = app
        .request("GET", "/api/gallery/categories?locale=fr", None, None)
        .await;
    assert_eq!(unknown.body["data"]["locale"], "he");
}

#[tokio::test]
async fn test_structured_data_describes_site_and_gallery() {
    let app = helpers::TestApp::seeded().await;

    let response = app.request("GET", "/api/structured-data", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["person"]["@type"], "Person");
    assert_eq!(data["website"]["@type"], "WebSite");
    assert_eq!(data["gallery"]["@type"], "ImageGallery");

    let images = data["gallery"]["image"].as_array().unwrap();
    assert_eq!(images.len(), 10);
    assert!(
        images[0]["url"]
            .as_str()
            .unwrap()
            .starts_with("https://photos.example.com/photo/")
    );
}

#[tokio::test]
async fn test_health_reports_components() {
    let app = helpers::TestApp::new().await;

    let basic = app.request("GET", "/api/health", None, None).await;
    assert_eq!(basic.status, StatusCode::OK);
    assert_eq!(basic.body["data"]["status"], "ok");

    let detailed = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["data"]["status"], "ok");
    assert_eq!(detailed.body["data"]["storage_provider"], "local");
}
