//! Development fixtures: a consistent graph of users, listings, bookings
//! and reviews.
//!
//! The run is best-effort. Each row is written on its own, so an error
//! midway leaves whatever was already created in place.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{
    models::{
        booking::{BookingStatus, NewBookingParams},
        listing::{Listing, NewListingParams, PropertyType},
        review::{NewReviewParams, MAX_RATING, MIN_RATING},
        user::{NewUserParams, User, UserRole},
    },
    ports::{BookingRepository, ListingRepository, ReviewRepository, UserRepository},
    services::{catalog::CatalogService, passwords::hash_password},
};
use crate::error::AppError;
use crate::state::AppState;

pub const SEED_PASSWORD: &str = "password123";
pub const FALLBACK_HOST_EMAIL: &str = "auto_host@example.com";

const LISTING_KINDS: [&str; 3] = ["Cozy Room", "Spacious Mansion", "Rustic Cabin"];
const PLACE_KINDS: [&str; 3] = ["place", "villa", "apartment"];
const CITIES: [&str; 5] = ["New York", "London", "Paris", "Tokyo", "Sydney"];
const COUNTRIES: [&str; 5] = ["USA", "UK", "France", "Japan", "Australia"];
const AMENITIES: [&str; 4] = ["WiFi, Pool", "Gym, Kitchen", "Parking, Balcony", "Pet-Friendly"];
const COMMENTS: [&str; 5] = [
    "Great place!",
    "Highly recommended.",
    "Clean and cozy.",
    "Had a wonderful stay.",
    "Excellent value.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    pub clear: bool,
    pub num_users: usize,
    pub num_listings_per_host: usize,
    pub num_bookings_per_listing: usize,
    pub num_reviews_per_listing: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            clear: false,
            num_users: 5,
            num_listings_per_host: 3,
            num_bookings_per_listing: 2,
            num_reviews_per_listing: 1,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub cleared: bool,
    pub users_created: usize,
    pub users_reused: usize,
    pub users_skipped: usize,
    pub fallback_host: bool,
    pub hosts: usize,
    pub guests: usize,
    pub listings_created: usize,
    pub bookings_created: usize,
    pub bookings_skipped: usize,
    pub reviews_created: usize,
    pub reviews_skipped: usize,
}

pub struct Seeder {
    users: Arc<dyn UserRepository>,
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
    reviews: Arc<dyn ReviewRepository>,
    catalog: Arc<CatalogService>,
}

/// Uniform pick from a non-empty slice.
fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

impl Seeder {
    pub fn new(
        users: Arc<dyn UserRepository>,
        listings: Arc<dyn ListingRepository>,
        bookings: Arc<dyn BookingRepository>,
        reviews: Arc<dyn ReviewRepository>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self { users, listings, bookings, reviews, catalog }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.user_repo.clone(),
            state.listing_repo.clone(),
            state.booking_repo.clone(),
            state.review_repo.clone(),
            state.catalog_service.clone(),
        )
    }

    pub async fn run<R: Rng>(&self, options: &SeedOptions, rng: &mut R) -> Result<SeedReport, AppError> {
        info!("Starting database seeding...");
        let mut report = SeedReport::default();

        if options.clear {
            self.clear().await?;
            report.cleared = true;
        }

        // One hash for every generated account; they share a password.
        let password_hash = hash_password(SEED_PASSWORD)?;

        let users = self.seed_users(options.num_users, &password_hash, rng, &mut report).await?;
        let (mut hosts, guests): (Vec<User>, Vec<User>) = users.into_iter().partition(|u| u.role.can_host());

        if hosts.is_empty() {
            warn!("No hosts created. Creating at least one host for listings.");
            hosts.push(self.fallback_host(&password_hash).await?);
            report.fallback_host = true;
        }
        report.hosts = hosts.len();
        report.guests = guests.len();

        let listings = self.seed_listings(&hosts, options.num_listings_per_host, rng, &mut report).await?;
        self.seed_bookings(&listings, &guests, options.num_bookings_per_listing, rng, &mut report).await?;
        self.seed_reviews(&listings, &guests, options.num_reviews_per_listing, rng, &mut report).await?;

        info!(?report, "Database seeding completed successfully!");
        Ok(report)
    }

    /// Children before parents: reviews, bookings, listings, then every
    /// account that is not a superuser.
    pub async fn clear(&self) -> Result<(), AppError> {
        warn!("Clearing existing data...");
        let reviews = self.reviews.delete_all().await?;
        let bookings = self.bookings.delete_all().await?;
        let listings = self.listings.delete_all().await?;
        let users = self.users.delete_non_superusers().await?;
        info!(reviews, bookings, listings, users, "Existing data cleared.");
        Ok(())
    }

    async fn seed_users<R: Rng>(
        &self,
        count: usize,
        password_hash: &str,
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<Vec<User>, AppError> {
        info!("Creating {} sample users...", count);
        let mut users = Vec::with_capacity(count);

        for i in 0..count {
            let email = format!("user{}@example.com", i);

            if let Some(existing) = self.users.find_by_email(&email).await? {
                warn!("User {} already exists, skipping creation.", email);
                report.users_reused += 1;
                users.push(existing);
                continue;
            }

            let username = format!("user{}", i);
            if let Some(taken) = self.users.find_by_username(&username).await? {
                warn!("Username {} is held by {}, skipping {}.", username, taken.email, email);
                report.users_skipped += 1;
                continue;
            }

            let user = User::new(NewUserParams {
                username,
                email,
                password_hash: password_hash.to_string(),
                first_name: format!("First{}", i),
                last_name: format!("Last{}", i),
                role: *pick(rng, &UserRole::ALL),
            });
            let created = self.users.create(&user).await?;
            info!("Created user: {} ({})", created.email, created.role);
            report.users_created += 1;
            users.push(created);
        }

        Ok(users)
    }

    async fn fallback_host(&self, password_hash: &str) -> Result<User, AppError> {
        if let Some(existing) = self.users.find_by_email(FALLBACK_HOST_EMAIL).await?
            && existing.role.can_host()
        {
            warn!("Reusing fallback host {}", existing.email);
            return Ok(existing);
        }

        let host = User::new(NewUserParams {
            username: "auto_host".into(),
            email: FALLBACK_HOST_EMAIL.into(),
            password_hash: password_hash.to_string(),
            first_name: "Auto".into(),
            last_name: "Host".into(),
            role: UserRole::Host,
        });
        let created = self.users.create(&host).await?;
        info!("Created fallback host: {}", created.email);
        Ok(created)
    }

    async fn seed_listings<R: Rng>(
        &self,
        hosts: &[User],
        per_host: usize,
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<Vec<Listing>, AppError> {
        info!("Creating sample listings...");
        let mut listings = Vec::with_capacity(hosts.len() * per_host);

        for host in hosts {
            for i in 0..per_host {
                let params = NewListingParams {
                    host_id: host.id,
                    title: format!("{}'s {} {}", host.first_name, pick(rng, &LISTING_KINDS), i + 1),
                    description: format!("A beautiful {} in {}.", pick(rng, &PLACE_KINDS), pick(rng, &CITIES)),
                    address: format!("{} Main St", rng.gen_range(1..=100)),
                    city: pick(rng, &CITIES).to_string(),
                    country: pick(rng, &COUNTRIES).to_string(),
                    price_per_night: Decimal::new(rng.gen_range(5_000..=50_000), 2),
                    property_type: *pick(rng, &PropertyType::ALL),
                    num_bedrooms: rng.gen_range(1..=5),
                    num_bathrooms: rng.gen_range(1..=3),
                    max_guests: rng.gen_range(1..=10),
                    amenities: pick(rng, &AMENITIES).to_string(),
                };

                listings.push(self.catalog.create_listing(params).await?);
                report.listings_created += 1;
            }
        }

        Ok(listings)
    }

    async fn seed_bookings<R: Rng>(
        &self,
        listings: &[Listing],
        guests: &[User],
        per_listing: usize,
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), AppError> {
        info!("Creating sample bookings...");
        let today = Utc::now().date_naive();

        for listing in listings {
            for _ in 0..per_listing {
                if guests.is_empty() {
                    warn!("No guest users available to create booking for {}", listing.title);
                    report.bookings_skipped += 1;
                    continue;
                }

                let guest = pick(rng, guests);
                let check_in_date = today + Duration::days(rng.gen_range(1..=30));
                let check_out_date = check_in_date + Duration::days(rng.gen_range(2..=7));

                self.catalog.create_booking(listing.listing_id, NewBookingParams {
                    user_id: guest.id,
                    check_in_date,
                    check_out_date,
                    status: *pick(rng, &BookingStatus::ALL),
                }).await?;
                report.bookings_created += 1;
            }
        }

        Ok(())
    }

    async fn seed_reviews<R: Rng>(
        &self,
        listings: &[Listing],
        guests: &[User],
        per_listing: usize,
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), AppError> {
        info!("Creating sample reviews...");

        for listing in listings {
            for _ in 0..per_listing {
                if guests.is_empty() {
                    warn!("No guest users available to create review for {}", listing.title);
                    report.reviews_skipped += 1;
                    continue;
                }

                let reviewer = pick(rng, guests);
                if self.reviews.exists_for(listing.listing_id, reviewer.id).await? {
                    warn!("User {} already reviewed {}, skipping.", reviewer.email, listing.title);
                    report.reviews_skipped += 1;
                    continue;
                }

                self.catalog.create_review(NewReviewParams {
                    listing_id: listing.listing_id,
                    user_id: reviewer.id,
                    rating: rng.gen_range(MIN_RATING..=MAX_RATING),
                    comment: pick(rng, &COMMENTS).to_string(),
                }).await?;
                report.reviews_created += 1;
            }
        }

        Ok(())
    }
}
