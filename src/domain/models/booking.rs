use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use uuid::Uuid;

use super::{listing::{validate_price, Listing}, parsed_column, UnknownVariant};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "booking status", value: s.to_string() })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub booking_id: Uuid,
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub user_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

impl Booking {
    /// Books `listing` for the given stay. The total is fixed here from the
    /// listing's current nightly price and never recomputed afterwards.
    pub fn new(listing: &Listing, params: NewBookingParams) -> Result<Self, AppError> {
        let total_price = quote_total(listing.price_per_night, params.check_in_date, params.check_out_date)?;

        Ok(Self {
            booking_id: Uuid::new_v4(),
            listing_id: listing.listing_id,
            user_id: params.user_id,
            check_in_date: params.check_in_date,
            check_out_date: params.check_out_date,
            total_price,
            status: params.status,
            booked_at: Utc::now(),
        })
    }
}

pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

pub fn quote_total(price_per_night: Decimal, check_in: NaiveDate, check_out: NaiveDate) -> Result<Decimal, AppError> {
    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return Err(AppError::Validation("check_out_date must be after check_in_date".into()));
    }
    // Same precision as the nightly price; long stays at high rates overflow it.
    validate_price("total_price", price_per_night * Decimal::from(nights))
}

impl<'r> FromRow<'r, SqliteRow> for Booking {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            booking_id: parsed_column(row, "booking_id")?,
            listing_id: parsed_column(row, "listing_id")?,
            user_id: parsed_column(row, "user_id")?,
            check_in_date: row.try_get("check_in_date")?,
            check_out_date: row.try_get("check_out_date")?,
            total_price: parsed_column(row, "total_price")?,
            status: parsed_column(row, "status")?,
            booked_at: row.try_get("booked_at")?,
        })
    }
}
