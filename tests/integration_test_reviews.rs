mod common;

use axum::http::StatusCode;
use common::TestApp;
use uuid::Uuid;

#[tokio::test]
async fn test_review_shape() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let listing_id = app.create_listing(&host_id, "70.00").await;

    let (status, body) = app.create_review(&listing_id, &guest_id, 5).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["property"], listing_id.as_str());
    assert_eq!(body["user"]["email"], "guest@example.com");
    assert_eq!(body["rating"], 5);
    assert_eq!(body["comment"], "Clean and cozy.");
}

#[tokio::test]
async fn test_second_review_by_same_user_conflicts() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let listing_id = app.create_listing(&host_id, "70.00").await;

    let (status, _) = app.create_review(&listing_id, &guest_id, 4).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.create_review(&listing_id, &guest_id, 2).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    assert_eq!(app.count("reviews").await, 1);
}

#[tokio::test]
async fn test_same_user_may_review_other_listings() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let first = app.create_listing(&host_id, "70.00").await;
    let second = app.create_listing(&host_id, "90.00").await;

    assert_eq!(app.create_review(&first, &guest_id, 3).await.0, StatusCode::CREATED);
    assert_eq!(app.create_review(&second, &guest_id, 3).await.0, StatusCode::CREATED);
    assert_eq!(app.count("reviews").await, 2);
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let listing_id = app.create_listing(&host_id, "70.00").await;

    assert_eq!(app.create_review(&listing_id, &guest_id, 6).await.0, StatusCode::BAD_REQUEST);
    assert_eq!(app.create_review(&listing_id, &guest_id, 0).await.0, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("reviews").await, 0);
}

#[tokio::test]
async fn test_review_rejects_dangling_references() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let listing_id = app.create_listing(&host_id, "70.00").await;

    let (status, _) = app.create_review(&listing_id, &Uuid::new_v4().to_string(), 4).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.create_review(&Uuid::new_v4().to_string(), &guest_id, 4).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_review() {
    let app = TestApp::new().await;
    let host_id = app.create_user("host", "host").await;
    let guest_id = app.create_user("guest", "guest").await;
    let listing_id = app.create_listing(&host_id, "70.00").await;
    let (_, created) = app.create_review(&listing_id, &guest_id, 4).await;
    let uri = format!("/api/v1/reviews/{}", created["review_id"].as_str().unwrap());

    assert_eq!(app.send("DELETE", &uri, None).await.0, StatusCode::OK);
    assert_eq!(app.send("GET", &uri, None).await.0, StatusCode::NOT_FOUND);

    // The pair is free again once the old review is gone.
    assert_eq!(app.create_review(&listing_id, &guest_id, 5).await.0, StatusCode::CREATED);
}
