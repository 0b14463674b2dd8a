use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::catalog::CatalogService;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_listing_repo::SqliteListingRepo,
    sqlite_review_repo::SqliteReviewRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    run_sqlite_migrations(&pool).await?;

    Ok(build_state(config.clone(), pool))
}

pub fn build_state(config: Config, pool: SqlitePool) -> AppState {
    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let listing_repo = Arc::new(SqliteListingRepo::new(pool.clone()));
    let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
    let review_repo = Arc::new(SqliteReviewRepo::new(pool));

    let catalog_service = Arc::new(CatalogService::new(
        user_repo.clone(),
        listing_repo.clone(),
        booking_repo.clone(),
        review_repo.clone(),
    ));

    AppState {
        config,
        user_repo,
        listing_repo,
        booking_repo,
        review_repo,
        catalog_service,
    }
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite").run(pool).await?;
    Ok(())
}
