mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_listing_read_shape_nests_host() {
    let app = TestApp::new().await;
    let host_id = app.create_user("alice", "host").await;
    let listing_id = app.create_listing(&host_id, "150.00").await;

    let (status, body) = app.send("GET", &format!("/api/v1/listings/{}", listing_id), None).await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.get("host_id").is_none());
    assert_eq!(body["host"]["id"], host_id.as_str());
    assert_eq!(body["host"]["email"], "alice@example.com");
    assert_eq!(body["host"]["first_name"], "alice-first");
    assert!(body["host"].get("password_hash").is_none());
    assert_eq!(body["price_per_night"], "150.00");
    assert_eq!(body["reviews"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_listing_create_ignores_read_only_fields() {
    let app = TestApp::new().await;
    let host_id = app.create_user("bob", "host").await;
    let supplied_id = Uuid::new_v4().to_string();

    let (status, body) = app.send("POST", "/api/v1/listings", Some(json!({
        "listing_id": supplied_id,
        "created_at": "2001-01-01T00:00:00Z",
        "host_id": host_id,
        "title": "Rustic Cabin 2",
        "description": "A beautiful place in Tokyo.",
        "address": "5 Main St",
        "city": "Tokyo",
        "country": "Japan",
        "price_per_night": "80.5",
        "property_type": "cabin",
        "num_bedrooms": 1,
        "num_bathrooms": 1,
        "max_guests": 2
    }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["listing_id"], supplied_id.as_str());
    assert!(!body["created_at"].as_str().unwrap().starts_with("2001"));
    assert_eq!(body["price_per_night"], "80.50");
    assert_eq!(body["amenities"], "");
}

#[tokio::test]
async fn test_listing_update_is_partial_and_refreshes_updated_at() {
    let app = TestApp::new().await;
    let host_id = app.create_user("carol", "host").await;
    let listing_id = app.create_listing(&host_id, "100.00").await;

    let (_, before) = app.send("GET", &format!("/api/v1/listings/{}", listing_id), None).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let (status, after) = app.send("PUT", &format!("/api/v1/listings/{}", listing_id), Some(json!({
        "title": "Renamed",
        "price_per_night": "120.00"
    }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["title"], "Renamed");
    assert_eq!(after["price_per_night"], "120.00");
    assert_eq!(after["city"], before["city"]);
    assert_eq!(after["created_at"], before["created_at"]);
    assert_ne!(after["updated_at"], before["updated_at"]);
}

#[tokio::test]
async fn test_listing_rejects_guest_or_missing_host() {
    let app = TestApp::new().await;
    let guest_id = app.create_user("dave", "guest").await;

    let payload = |host_id: String| json!({
        "host_id": host_id,
        "title": "Cozy Room 1",
        "description": "d",
        "address": "1 Main St",
        "city": "London",
        "country": "UK",
        "price_per_night": "60.00",
        "num_bedrooms": 1,
        "num_bathrooms": 1,
        "max_guests": 1
    });

    let (status, _) = app.send("POST", "/api/v1/listings", Some(payload(guest_id))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.send("POST", "/api/v1/listings", Some(payload(Uuid::new_v4().to_string()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("user"));

    assert_eq!(app.count("listings").await, 0);
}

#[tokio::test]
async fn test_listing_rejects_negative_price() {
    let app = TestApp::new().await;
    let host_id = app.create_user("erin", "host").await;

    let (status, _) = app.send("POST", "/api/v1/listings", Some(json!({
        "host_id": host_id,
        "title": "t",
        "description": "d",
        "address": "a",
        "city": "Paris",
        "country": "France",
        "price_per_night": "-1.00",
        "num_bedrooms": 1,
        "num_bathrooms": 1,
        "max_guests": 1
    }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_reviews_are_newest_first() {
    let app = TestApp::new().await;
    let host_id = app.create_user("frank", "host").await;
    let listing_id = app.create_listing(&host_id, "90.00").await;

    let mut authors = Vec::new();
    for name in ["g1", "g2", "g3"] {
        let guest = app.create_user(name, "guest").await;
        let (status, _) = app.create_review(&listing_id, &guest, 4).await;
        assert_eq!(status, StatusCode::CREATED);
        authors.push(format!("{}@example.com", name));
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let (_, body) = app.send("GET", &format!("/api/v1/listings/{}", listing_id), None).await;
    let emails: Vec<&str> = body["reviews"].as_array().unwrap().iter()
        .map(|r| r["user"]["email"].as_str().unwrap())
        .collect();

    authors.reverse();
    assert_eq!(emails, authors);
}

#[tokio::test]
async fn test_unknown_listing_is_not_found() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let (status, _) = app.send("GET", &format!("/api/v1/listings/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("PUT", &format!("/api/v1/listings/{}", missing), Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("DELETE", &format!("/api/v1/listings/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
