pub mod sqlite_booking_repo;
pub mod sqlite_listing_repo;
pub mod sqlite_review_repo;
pub mod sqlite_user_repo;
