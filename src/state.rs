use std::sync::Arc;
use crate::domain::ports::{BookingRepository, ListingRepository, ReviewRepository, UserRepository};
use crate::domain::services::catalog::CatalogService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub listing_repo: Arc<dyn ListingRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub catalog_service: Arc<CatalogService>,
}
