//! Integration tests for photo management.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

async fn add_photo(app: &helpers::TestApp, token: &str, title: &str, category: &str) -> Value {
    let response = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({
                "title": title,
                "category": category,
                "src": format!("https://cdn.example.com/{title}.jpg"),
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"].clone()
}

async fn public_ids(app: &helpers::TestApp) -> Vec<i64> {
    let response = app.request("GET", "/api/gallery", None, None).await;
    response.body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_photo_appears_on_top() {
    let app = helpers::TestApp::seeded().await;
    let token = app.login().await;

    let photo = add_photo(&app, &token, "Desert Dunes", "landscape").await;
    assert_eq!(photo["title"], "Desert Dunes");
    assert_eq!(photo["alt"], "Desert Dunes");
    assert_eq!(photo["category"], "Landscape");
    assert_eq!(photo["hidden"], false);

    assert_eq!(public_ids(&app).await[0], photo["id"].as_i64().unwrap());

    let detail = app
        .request("GET", "/api/gallery/photos/desert-dunes", None, None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_photo_with_presentation() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({
                "title": "Framed",
                "category": "Portrait",
                "src": "https://cdn.example.com/framed.jpg",
                "passepartout_color": "cream",
                "passepartout_thickness": "medium",
                "frame_color": "oak",
                "frame_thickness": "thin",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let photo = &response.body["data"];
    assert_eq!(photo["passepartout_color"], "cream");
    assert_eq!(photo["frame_color"], "oak");
}

#[tokio::test]
async fn test_create_photo_rejects_bad_input() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let missing_src = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({ "title": "A", "category": "Urban" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing_src.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_src.body["success"], false);
    assert_eq!(missing_src.body["error"], "Image URL is required");

    let bad_url = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({ "title": "A", "category": "Urban", "src": "javascript:alert(1)" })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_url.body["error"], "Invalid image URL");

    let bad_category = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({ "title": "A", "category": "Food", "src": "https://cdn.example.com/a.jpg" })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_category.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_photo_strips_script() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/admin/photos",
            Some(json!({
                "title": "Night<script>alert(1)</script>",
                "category": "Urban",
                "src": "https://cdn.example.com/night.jpg",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.body["data"]["title"], "Night");
}

#[tokio::test]
async fn test_update_photo() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let photo = add_photo(&app, &token, "Old Title", "Nature").await;
    let id = photo["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/photos/{id}"),
            Some(json!({
                "title": "New Title",
                "alt": "A renamed photo",
                "src": "https://cdn.example.com/new.jpg",
                "hero_eligible": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &response.body["data"];
    assert_eq!(updated["title"], "New Title");
    assert_eq!(updated["category"], "Nature");
    assert_eq!(updated["hero_eligible"], true);

    let hero = app.request("GET", "/api/gallery/hero", None, None).await;
    assert_eq!(hero.body["data"]["id"], id);
}

#[tokio::test]
async fn test_update_requires_title_alt_and_src() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let photo = add_photo(&app, &token, "Keep", "Nature").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/photos/{}", photo["id"]),
            Some(json!({ "title": "Only title" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Title, alt text, and image URL are required"
    );
}

#[tokio::test]
async fn test_update_missing_photo_fails() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "PUT",
            "/api/admin/photos/999",
            Some(json!({
                "title": "X",
                "alt": "X",
                "src": "https://cdn.example.com/x.jpg",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Photo not found or update failed");
}

#[tokio::test]
async fn test_soft_delete_hides_then_unhide_restores() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let photo = add_photo(&app, &token, "Fleeting", "Urban").await;
    let id = photo["id"].as_i64().unwrap();

    let deleted = app
        .request("DELETE", &format!("/api/admin/photos/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(public_ids(&app).await.is_empty());

    let admin_list = app
        .request("GET", "/api/admin/photos", None, Some(&token))
        .await;
    assert_eq!(admin_list.body["data"][0]["hidden"], true);

    let restored = app
        .request(
            "POST",
            &format!("/api/admin/photos/{id}/visibility"),
            Some(json!({ "hidden": false })),
            Some(&token),
        )
        .await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(public_ids(&app).await, vec![id]);
}

#[tokio::test]
async fn test_permanent_delete_removes_row() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let photo = add_photo(&app, &token, "Gone", "Urban").await;
    let id = photo["id"].as_i64().unwrap();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/photos/{id}?permanent=true"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let admin_list = app
        .request("GET", "/api/admin/photos", None, Some(&token))
        .await;
    assert!(admin_list.body["data"].as_array().unwrap().is_empty());

    let again = app
        .request(
            "DELETE",
            &format!("/api/admin/photos/{id}?permanent=true"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["error"], "Failed to delete photo");
}

#[tokio::test]
async fn test_reorder_sets_display_order() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let a = add_photo(&app, &token, "A", "Urban").await["id"].as_i64().unwrap();
    let b = add_photo(&app, &token, "B", "Urban").await["id"].as_i64().unwrap();
    let c = add_photo(&app, &token, "C", "Urban").await["id"].as_i64().unwrap();
    assert_eq!(public_ids(&app).await, vec![c, b, a]);

    let response = app
        .request(
            "POST",
            "/api/admin/photos/reorder",
            Some(json!({ "ids": [a, c, b] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(public_ids(&app).await, vec![a, c, b]);

    let empty = app
        .request(
            "POST",
            "/api/admin/photos/reorder",
            Some(json!({ "ids": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(empty.body["error"], "Invalid order data");
}

#[tokio::test]
async fn test_bulk_delete_reports_counts() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let a = add_photo(&app, &token, "A", "Nature").await["id"].as_i64().unwrap();
    let b = add_photo(&app, &token, "B", "Nature").await["id"].as_i64().unwrap();

    let response = app
        .request(
            "POST",
            "/api/admin/photos/bulk-delete",
            Some(json!({ "ids": [a, b, 999] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["deleted"], 2);
    assert_eq!(response.body["data"]["failed"], 1);
    assert!(public_ids(&app).await.is_empty());

    let none = app
        .request(
            "POST",
            "/api/admin/photos/bulk-delete",
            Some(json!({ "ids": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(none.body["error"], "No photos selected");
}

#[tokio::test]
async fn test_stats_count_hidden_and_categories() {
    let app = helpers::TestApp::seeded().await;
    let token = app.login().await;
    let first = public_ids(&app).await[0];

    app.request(
        "DELETE",
        &format!("/api/admin/photos/{first}"),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", "/api/admin/photos/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stats = &response.body["data"];
    assert_eq!(stats["total"], 12);
    assert_eq!(stats["hidden"], 1);
    assert_eq!(stats["visible"], 11);

    let per_category: u64 = stats["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();
    assert_eq!(per_category, 12);
}
