use travel_listings::{
    api::router::create_router,
    config::Config,
    infra::factory::{build_state, run_sqlite_migrations},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
        };

        let state = Arc::new(build_state(config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
        (status, value)
    }

    pub async fn create_user(&self, name: &str, role: &str) -> String {
        let (status, body) = self.send("POST", "/api/v1/users", Some(json!({
            "username": name,
            "email": format!("{}@example.com", name),
            "password": "password123",
            "first_name": format!("{}-first", name),
            "last_name": format!("{}-last", name),
            "role": role
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "user creation failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_listing(&self, host_id: &str, price: &str) -> String {
        let (status, body) = self.send("POST", "/api/v1/listings", Some(json!({
            "host_id": host_id,
            "title": "Cozy Room 1",
            "description": "A beautiful place in Paris.",
            "address": "10 Main St",
            "city": "Paris",
            "country": "France",
            "price_per_night": price,
            "property_type": "apartment",
            "num_bedrooms": 2,
            "num_bathrooms": 1,
            "max_guests": 4,
            "amenities": "WiFi, Pool"
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "listing creation failed: {}", body);
        body["listing_id"].as_str().unwrap().to_string()
    }

    pub async fn create_booking(&self, listing_id: &str, user_id: &str, check_in: &str, check_out: &str) -> (StatusCode, Value) {
        self.send("POST", "/api/v1/bookings", Some(json!({
            "property_id": listing_id,
            "user_id": user_id,
            "check_in_date": check_in,
            "check_out_date": check_out
        }))).await
    }

    pub async fn create_review(&self, listing_id: &str, user_id: &str, rating: i32) -> (StatusCode, Value) {
        self.send("POST", "/api/v1/reviews", Some(json!({
            "property_id": listing_id,
            "user_id": user_id,
            "rating": rating,
            "comment": "Clean and cozy."
        }))).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
