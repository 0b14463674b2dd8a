pub mod booking;
pub mod health;
pub mod listing;
pub mod review;
pub mod user;
