use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info};
use uuid::Uuid;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash, first_name, last_name, role, is_superuser, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.as_str())
            .bind(user.is_superuser)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let id = id.to_string();
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM reviews WHERE user_id = ? OR listing_id IN (SELECT listing_id FROM listings WHERE host_id = ?)")
            .bind(&id).bind(&id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM bookings WHERE user_id = ? OR listing_id IN (SELECT listing_id FROM listings WHERE host_id = ?)")
            .bind(&id).bind(&id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM listings WHERE host_id = ?")
            .bind(&id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("SQLite User Deletion Failed: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete_non_superusers(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            "DELETE FROM reviews
             WHERE user_id IN (SELECT id FROM users WHERE is_superuser = 0)
                OR listing_id IN (SELECT listing_id FROM listings WHERE host_id IN (SELECT id FROM users WHERE is_superuser = 0))"
        )
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query(
            "DELETE FROM bookings
             WHERE user_id IN (SELECT id FROM users WHERE is_superuser = 0)
                OR listing_id IN (SELECT listing_id FROM listings WHERE host_id IN (SELECT id FROM users WHERE is_superuser = 0))"
        )
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM listings WHERE host_id IN (SELECT id FROM users WHERE is_superuser = 0)")
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM users WHERE is_superuser = 0")
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        info!("Deleted {} non-superuser accounts", result.rows_affected());
        Ok(result.rows_affected())
    }
}
