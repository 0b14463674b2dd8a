use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use uuid::Uuid;

use super::{parsed_column, UnknownVariant};
use crate::error::AppError;

/// Prices are fixed-point with at most 10 digits, 2 of them after the point.
pub const PRICE_MAX_DIGITS: u32 = 10;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Room,
    Mansion,
    Countryside,
    Cabin,
    Apartment,
    Villa,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Room,
        PropertyType::Mansion,
        PropertyType::Countryside,
        PropertyType::Cabin,
        PropertyType::Apartment,
        PropertyType::Villa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Room => "room",
            PropertyType::Mansion => "mansion",
            PropertyType::Countryside => "countryside",
            PropertyType::Cabin => "cabin",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "property type", value: s.to_string() })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub listing_id: Uuid,
    pub host_id: Uuid,
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
}

pub struct NewListingParams {
    pub host_id: Uuid,
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
}

impl Listing {
    pub fn new(params: NewListingParams) -> Result<Self, AppError> {
        let now = Utc::now();

        Self {
            listing_id: Uuid::new_v4(),
            host_id: params.host_id,
            title: params.title,
            description: params.description,
            address: params.address,
            city: params.city,
            country: params.country,
            price_per_night: params.price_per_night,
            property_type: params.property_type,
            num_bedrooms: params.num_bedrooms,
            num_bathrooms: params.num_bathrooms,
            max_guests: params.max_guests,
            amenities: params.amenities,
            created_at: now,
            updated_at: now,
        }
        .validated()
    }

    /// Checks every field against its declared range and normalizes the
    /// price to two decimal places.
    pub fn validated(mut self) -> Result<Self, AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("address", &self.address),
            ("city", &self.city),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} must not be blank", field)));
            }
        }

        for (field, value) in [
            ("num_bedrooms", self.num_bedrooms),
            ("num_bathrooms", self.num_bathrooms),
            ("max_guests", self.max_guests),
        ] {
            validate_count(field, value)?;
        }

        self.price_per_night = validate_price("price_per_night", self.price_per_night)?;
        Ok(self)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

pub fn validate_count(field: &str, value: i32) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    Ok(value)
}

pub fn validate_price(field: &str, value: Decimal) -> Result<Decimal, AppError> {
    let mut normalized = value.normalize();

    if normalized.is_sign_negative() && !normalized.is_zero() {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    if normalized.scale() > PRICE_DECIMAL_PLACES {
        return Err(AppError::Validation(format!(
            "{} must have at most {} decimal places", field, PRICE_DECIMAL_PLACES
        )));
    }

    let limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES));
    if normalized >= limit {
        return Err(AppError::Validation(format!(
            "{} must have at most {} digits", field, PRICE_MAX_DIGITS
        )));
    }

    normalized.rescale(PRICE_DECIMAL_PLACES);
    Ok(normalized)
}

impl<'r> FromRow<'r, SqliteRow> for Listing {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            listing_id: parsed_column(row, "listing_id")?,
            host_id: parsed_column(row, "host_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            country: row.try_get("country")?,
            price_per_night: parsed_column(row, "price_per_night")?,
            property_type: parsed_column(row, "property_type")?,
            num_bedrooms: row.try_get("num_bedrooms")?,
            num_bathrooms: row.try_get("num_bathrooms")?,
            max_guests: row.try_get("max_guests")?,
            amenities: row.try_get("amenities")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
