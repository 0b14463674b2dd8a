use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};
use uuid::Uuid;

use super::parsed_column;
use crate::error::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub review_id: Uuid,
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewReviewParams {
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

impl Review {
    pub fn new(params: NewReviewParams) -> Result<Self, AppError> {
        Ok(Self {
            review_id: Uuid::new_v4(),
            listing_id: params.listing_id,
            user_id: params.user_id,
            rating: validate_rating(params.rating)?,
            comment: params.comment,
            created_at: Utc::now(),
        })
    }
}

pub fn validate_rating(rating: i32) -> Result<i32, AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "rating must be between {} and {}", MIN_RATING, MAX_RATING
        )));
    }
    Ok(rating)
}

impl<'r> FromRow<'r, SqliteRow> for Review {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            review_id: parsed_column(row, "review_id")?,
            listing_id: parsed_column(row, "listing_id")?,
            user_id: parsed_column(row, "user_id")?,
            rating: row.try_get("rating")?,
            comment: row.try_get("comment")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for rating in MIN_RATING..=MAX_RATING {
            assert_eq!(validate_rating(rating).unwrap(), rating);
        }
        assert!(matches!(validate_rating(0), Err(AppError::Validation(_))));
        assert!(matches!(validate_rating(6), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_comment_may_be_empty() {
        let review = Review::new(NewReviewParams {
            listing_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rating: 4,
            comment: String::new(),
        })
        .unwrap();
        assert!(review.comment.is_empty());
    }
}
