use crate::domain::models::{booking::Booking, listing::Listing, review::Review, user::User};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    /// Removes the user together with the listings it hosts and every
    /// booking and review that depends on either.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn delete_non_superusers(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn create(&self, listing: &Listing) -> Result<Listing, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, AppError>;
    async fn list(&self) -> Result<Vec<Listing>, AppError>;
    async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Listing>, AppError>;
    async fn update(&self, listing: &Listing) -> Result<Listing, AppError>;
    /// Removes the listing after its bookings and reviews.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn delete_all(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn delete_all(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fails with `AppError::DuplicateReview` if the (listing, user) pair
    /// already has a review.
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, AppError>;
    async fn list(&self) -> Result<Vec<Review>, AppError>;
    /// Newest first.
    async fn list_by_listing(&self, listing_id: Uuid) -> Result<Vec<Review>, AppError>;
    async fn exists_for(&self, listing_id: Uuid, user_id: Uuid) -> Result<bool, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
    async fn delete_all(&self) -> Result<u64, AppError>;
}
