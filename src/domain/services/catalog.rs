use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    models::{
        booking::{Booking, BookingStatus, NewBookingParams},
        listing::{Listing, NewListingParams},
        review::{NewReviewParams, Review},
        user::User,
    },
    ports::{BookingRepository, ListingRepository, ReviewRepository, UserRepository},
};
use crate::error::AppError;

/// A listing together with everything its read shape embeds.
pub struct ListingDetail {
    pub listing: Listing,
    pub host: User,
    pub reviews: Vec<ReviewDetail>,
}

pub struct BookingDetail {
    pub booking: Booking,
    pub listing: Listing,
    pub guest: User,
}

pub struct ReviewDetail {
    pub review: Review,
    pub author: User,
}

/// Write-side gate for listings, bookings and reviews.
///
/// Every create checks that the referenced users and listings exist before
/// touching storage, so callers get `DanglingReference` instead of a raw
/// constraint failure. Reviews are additionally checked for an existing
/// (listing, user) pair.
pub struct CatalogService {
    users: Arc<dyn UserRepository>,
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl CatalogService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        listings: Arc<dyn ListingRepository>,
        bookings: Arc<dyn BookingRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self { users, listings, bookings, reviews }
    }

    async fn require_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users.find_by_id(id).await?
            .ok_or_else(|| AppError::dangling("user", id))
    }

    async fn require_listing(&self, id: Uuid) -> Result<Listing, AppError> {
        self.listings.find_by_id(id).await?
            .ok_or_else(|| AppError::dangling("listing", id))
    }

    async fn require_host(&self, id: Uuid) -> Result<User, AppError> {
        let host = self.require_user(id).await?;
        if !host.role.can_host() {
            return Err(AppError::Validation(format!("user {} is not a host", host.id)));
        }
        Ok(host)
    }

    pub async fn create_listing(&self, params: NewListingParams) -> Result<Listing, AppError> {
        let listing = Listing::new(params)?;
        let host = self.require_host(listing.host_id).await?;

        let created = self.listings.create(&listing).await?;
        info!("Created listing: {} by {}", created.title, host.email);
        Ok(created)
    }

    /// Persists a modified listing, refreshing `updated_at`.
    pub async fn update_listing(&self, listing: Listing) -> Result<Listing, AppError> {
        let mut listing = listing.validated()?;
        self.require_host(listing.host_id).await?;
        listing.touch();

        let updated = self.listings.update(&listing).await?;
        info!("Listing updated: {}", updated.listing_id);
        Ok(updated)
    }

    pub async fn create_booking(&self, listing_id: Uuid, params: NewBookingParams) -> Result<Booking, AppError> {
        let listing = self.require_listing(listing_id).await?;
        let guest = self.require_user(params.user_id).await?;

        let booking = Booking::new(&listing, params)?;
        let created = self.bookings.create(&booking).await?;
        info!("Created booking for {} by {}", listing.title, guest.email);
        Ok(created)
    }

    pub async fn set_booking_status(&self, booking_id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        let mut booking = self.bookings.find_by_id(booking_id).await?
            .ok_or(AppError::NotFound("Booking not found".into()))?;

        booking.status = status;
        let updated = self.bookings.update(&booking).await?;
        info!("Booking {} is now {}", updated.booking_id, updated.status);
        Ok(updated)
    }

    pub async fn create_review(&self, params: NewReviewParams) -> Result<Review, AppError> {
        let review = Review::new(params)?;
        let listing = self.require_listing(review.listing_id).await?;
        let author = self.require_user(review.user_id).await?;

        if self.reviews.exists_for(review.listing_id, review.user_id).await? {
            return Err(AppError::DuplicateReview {
                listing_id: review.listing_id.to_string(),
                user_id: review.user_id.to_string(),
            });
        }

        let created = self.reviews.create(&review).await?;
        info!("Created review for {} by {}", listing.title, author.email);
        Ok(created)
    }

    pub async fn listing_detail(&self, listing: Listing) -> Result<ListingDetail, AppError> {
        let host = self.existing_user(listing.host_id).await?;
        let reviews = self.reviews.list_by_listing(listing.listing_id).await?;
        let reviews = self.review_details(reviews).await?;

        Ok(ListingDetail { listing, host, reviews })
    }

    pub async fn booking_detail(&self, booking: Booking) -> Result<BookingDetail, AppError> {
        let listing = self.listings.find_by_id(booking.listing_id).await?
            .ok_or_else(|| AppError::InternalWithMsg(format!("booking {} lost its listing", booking.booking_id)))?;
        let guest = self.existing_user(booking.user_id).await?;

        Ok(BookingDetail { booking, listing, guest })
    }

    pub async fn review_details(&self, reviews: Vec<Review>) -> Result<Vec<ReviewDetail>, AppError> {
        let mut authors: HashMap<Uuid, User> = HashMap::new();
        let mut details = Vec::with_capacity(reviews.len());

        for review in reviews {
            let author = match authors.get(&review.user_id) {
                Some(user) => user.clone(),
                None => {
                    let user = self.existing_user(review.user_id).await?;
                    authors.insert(user.id, user.clone());
                    user
                }
            };
            details.push(ReviewDetail { review, author });
        }

        Ok(details)
    }

    async fn existing_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users.find_by_id(id).await?
            .ok_or_else(|| AppError::InternalWithMsg(format!("user {} referenced but missing", id)))
    }
}
