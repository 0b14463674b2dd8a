use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (review_id, listing_id, user_id, rating, comment, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(review.review_id.to_string())
            .bind(review.listing_id.to_string())
            .bind(review.user_id.to_string())
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let duplicate = e.as_database_error().is_some_and(|db_err| db_err.is_unique_violation());
                if duplicate {
                    AppError::DuplicateReview {
                        listing_id: review.listing_id.to_string(),
                        user_id: review.user_id.to_string(),
                    }
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE review_id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_listing(&self, listing_id: Uuid) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE listing_id = ? ORDER BY created_at DESC")
            .bind(listing_id.to_string())
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn exists_for(&self, listing_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM reviews WHERE listing_id = ? AND user_id = ?")
            .bind(listing_id.to_string())
            .bind(user_id.to_string())
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = ?")
            .bind(id.to_string())
            .execute(&self.pool).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review not found".into()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM reviews").execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
