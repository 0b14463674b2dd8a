pub mod booking;
pub mod listing;
pub mod review;
pub mod user;

use std::str::FromStr;

use sqlx::{sqlite::SqliteRow, Row};
use thiserror::Error;

/// Returned when a string does not name a variant of one of the closed
/// schema enums (role, property type, booking status).
#[derive(Debug, Error)]
#[error("invalid {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Reads a TEXT column and parses it into `T`.
///
/// Identifiers, decimals and enum columns are stored as text in SQLite.
pub(crate) fn parsed_column<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;
    raw.parse::<T>().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
