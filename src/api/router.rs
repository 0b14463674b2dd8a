use axum::{
    body::Body,
    extract::Request,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{booking, health, listing, review, user};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Users
        .route("/api/v1/users", get(user::list_users).post(user::create_user))
        .route("/api/v1/users/{user_id}", get(user::get_user).delete(user::delete_user))

        // Listings
        .route("/api/v1/listings", get(listing::list_listings).post(listing::create_listing))
        .route("/api/v1/listings/{listing_id}", get(listing::get_listing).put(listing::update_listing).delete(listing::delete_listing))

        // Bookings
        .route("/api/v1/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking).put(booking::update_booking).delete(booking::delete_booking))

        // Reviews
        .route("/api/v1/reviews", get(review::list_reviews).post(review::create_review))
        .route("/api/v1/reviews/{review_id}", get(review::get_review).delete(review::delete_review))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
