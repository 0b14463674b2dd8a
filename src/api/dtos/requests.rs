use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::models::{
    booking::{BookingStatus, NewBookingParams},
    listing::{Listing, NewListingParams, PropertyType},
    review::NewReviewParams,
    user::UserRole,
};

// Write shapes deserialize leniently: fields the server owns (ids,
// timestamps, nested projections) are dropped if a client sends them.

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Deserialize)]
pub struct CreateListingRequest {
    pub host_id: Uuid,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub property_type: PropertyType,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub max_guests: i32,
    #[serde(default)]
    pub amenities: String,
}

impl From<CreateListingRequest> for NewListingParams {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            host_id: req.host_id,
            title: req.title,
            description: req.description,
            address: req.address,
            city: req.city,
            country: req.country,
            price_per_night: req.price_per_night,
            property_type: req.property_type,
            num_bedrooms: req.num_bedrooms,
            num_bathrooms: req.num_bathrooms,
            max_guests: req.max_guests,
            amenities: req.amenities,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateListingRequest {
    pub host_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub price_per_night: Option<Decimal>,
    pub property_type: Option<PropertyType>,
    pub num_bedrooms: Option<i32>,
    pub num_bathrooms: Option<i32>,
    pub max_guests: Option<i32>,
    pub amenities: Option<String>,
}

impl UpdateListingRequest {
    pub fn apply(self, listing: &mut Listing) {
        if let Some(host_id) = self.host_id { listing.host_id = host_id; }
        if let Some(title) = self.title { listing.title = title; }
        if let Some(description) = self.description { listing.description = description; }
        if let Some(address) = self.address { listing.address = address; }
        if let Some(city) = self.city { listing.city = city; }
        if let Some(country) = self.country { listing.country = country; }
        if let Some(price) = self.price_per_night { listing.price_per_night = price; }
        if let Some(property_type) = self.property_type { listing.property_type = property_type; }
        if let Some(n) = self.num_bedrooms { listing.num_bedrooms = n; }
        if let Some(n) = self.num_bathrooms { listing.num_bathrooms = n; }
        if let Some(n) = self.max_guests { listing.max_guests = n; }
        if let Some(amenities) = self.amenities { listing.amenities = amenities; }
    }
}

/// `total_price` is not part of this shape; it is always derived from the
/// listing's nightly price.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl CreateBookingRequest {
    pub fn into_parts(self) -> (Uuid, NewBookingParams) {
        (self.property_id, NewBookingParams {
            user_id: self.user_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
        })
    }
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub status: BookingStatus,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReviewParams {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            listing_id: req.property_id,
            user_id: req.user_id,
            rating: req.rating,
            comment: req.comment,
        }
    }
}
