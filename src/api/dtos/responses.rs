use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::{
    booking::BookingStatus,
    listing::{Listing, PropertyType},
    user::{User, UserRole},
};
use crate::domain::services::catalog::{BookingDetail, ListingDetail, ReviewDetail};

/// The reduced user embedded wherever a listing, booking or review points
/// at an account.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub property: Uuid,
    pub user: UserSummary,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewDetail> for ReviewResponse {
    fn from(detail: ReviewDetail) -> Self {
        let ReviewDetail { review, author } = detail;
        Self {
            review_id: review.review_id,
            property: review.listing_id,
            user: UserSummary::from(&author),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ListingResponse {
    pub listing_id: Uuid,
    pub host: UserSummary,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub price_per_night: Decimal,
    pub property_type: PropertyType,
    pub num_bedrooms: i32,
    pub num_bathrooms: i32,
    pub max_guests: i32,
    pub amenities: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Newest first.
    pub reviews: Vec<ReviewResponse>,
}

impl From<ListingDetail> for ListingResponse {
    fn from(detail: ListingDetail) -> Self {
        let ListingDetail { listing, host, mut reviews } = detail;
        reviews.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));

        Self {
            listing_id: listing.listing_id,
            host: UserSummary::from(&host),
            title: listing.title,
            description: listing.description,
            address: listing.address,
            city: listing.city,
            country: listing.country,
            price_per_night: listing.price_per_night,
            property_type: listing.property_type,
            num_bedrooms: listing.num_bedrooms,
            num_bathrooms: listing.num_bathrooms,
            max_guests: listing.max_guests,
            amenities: listing.amenities,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

/// What a booking shows of the listing it reserves.
#[derive(Serialize)]
pub struct ListingSummary {
    pub listing_id: Uuid,
    pub title: String,
    pub city: String,
    pub country: String,
    pub price_per_night: Decimal,
}

impl From<&Listing> for ListingSummary {
    fn from(listing: &Listing) -> Self {
        Self {
            listing_id: listing.listing_id,
            title: listing.title.clone(),
            city: listing.city.clone(),
            country: listing.country.clone(),
            price_per_night: listing.price_per_night,
        }
    }
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub property: ListingSummary,
    pub user: UserSummary,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

impl From<BookingDetail> for BookingResponse {
    fn from(detail: BookingDetail) -> Self {
        let BookingDetail { booking, listing, guest } = detail;
        Self {
            booking_id: booking.booking_id,
            property: ListingSummary::from(&listing),
            user: UserSummary::from(&guest),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            total_price: booking.total_price,
            status: booking.status,
            booked_at: booking.booked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        booking::{Booking, NewBookingParams},
        listing::NewListingParams,
        review::{NewReviewParams, Review},
        user::NewUserParams,
    };
    use chrono::Duration;

    fn user(n: u32, role: UserRole) -> User {
        User::new(NewUserParams {
            username: format!("user{}", n),
            email: format!("user{}@example.com", n),
            password_hash: "hash".into(),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            role,
        })
    }

    fn listing(host: &User) -> Listing {
        Listing::new(NewListingParams {
            host_id: host.id,
            title: "First0's Spacious Mansion 1".into(),
            description: "A beautiful villa in Sydney.".into(),
            address: "42 Main St".into(),
            city: "Sydney".into(),
            country: "Australia".into(),
            price_per_night: Decimal::new(25_000, 2),
            property_type: PropertyType::Mansion,
            num_bedrooms: 5,
            num_bathrooms: 3,
            max_guests: 10,
            amenities: "Parking, Balcony".into(),
        })
        .unwrap()
    }

    fn review_at(listing: &Listing, author: &User, offset_secs: i64) -> ReviewDetail {
        let mut review = Review::new(NewReviewParams {
            listing_id: listing.listing_id,
            user_id: author.id,
            rating: 5,
            comment: "Great place!".into(),
        })
        .unwrap();
        review.created_at = review.created_at + Duration::seconds(offset_secs);
        ReviewDetail { review, author: author.clone() }
    }

    #[test]
    fn test_listing_read_shape_nests_host_and_orders_reviews() {
        let host = user(0, UserRole::Host);
        let a = user(1, UserRole::Guest);
        let b = user(2, UserRole::Guest);
        let c = user(3, UserRole::Guest);
        let listing = listing(&host);

        let detail = ListingDetail {
            reviews: vec![review_at(&listing, &a, 0), review_at(&listing, &b, 20), review_at(&listing, &c, 10)],
            listing,
            host: host.clone(),
        };

        let json = serde_json::to_value(ListingResponse::from(detail)).unwrap();

        assert!(json.get("host_id").is_none());
        assert_eq!(json["host"]["email"], "user0@example.com");
        assert_eq!(json["host"].as_object().unwrap().len(), 4);
        assert_eq!(json["price_per_night"], "250.00");
        assert_eq!(json["property_type"], "mansion");

        let emails: Vec<&str> = json["reviews"].as_array().unwrap().iter()
            .map(|r| r["user"]["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["user2@example.com", "user3@example.com", "user1@example.com"]);
    }

    #[test]
    fn test_booking_read_shape_uses_listing_projection() {
        let host = user(0, UserRole::Host);
        let guest = user(1, UserRole::Guest);
        let listing = listing(&host);
        let booking = Booking::new(&listing, NewBookingParams {
            user_id: guest.id,
            check_in_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
            status: BookingStatus::Confirmed,
        })
        .unwrap();

        let json = serde_json::to_value(BookingResponse::from(BookingDetail { booking, listing, guest })).unwrap();

        let property = json["property"].as_object().unwrap();
        let mut keys: Vec<&str> = property.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["city", "country", "listing_id", "price_per_night", "title"]);
        assert_eq!(json["total_price"], "500.00");
        assert_eq!(json["status"], "confirmed");
        assert!(json.get("property_id").is_none());
        assert!(json.get("user_id").is_none());
    }
}
