use crate::domain::{models::listing::Listing, ports::ListingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteListingRepo {
    pool: SqlitePool,
}

impl SqliteListingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for SqliteListingRepo {
    async fn create(&self, listing: &Listing) -> Result<Listing, AppError> {
        sqlx::query_as::<_, Listing>(
            "INSERT INTO listings (listing_id, host_id, title, description, address, city, country, price_per_night, property_type, num_bedrooms, num_bathrooms, max_guests, amenities, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(listing.listing_id.to_string()).bind(listing.host_id.to_string())
            .bind(&listing.title).bind(&listing.description).bind(&listing.address)
            .bind(&listing.city).bind(&listing.country).bind(listing.price_per_night.to_string())
            .bind(listing.property_type.as_str()).bind(listing.num_bedrooms).bind(listing.num_bathrooms)
            .bind(listing.max_guests).bind(&listing.amenities).bind(listing.created_at).bind(listing.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, AppError> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE listing_id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Listing>, AppError> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_host(&self, host_id: Uuid) -> Result<Vec<Listing>, AppError> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE host_id = ? ORDER BY created_at ASC")
            .bind(host_id.to_string())
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, AppError> {
        sqlx::query_as::<_, Listing>(
            "UPDATE listings SET host_id=?, title=?, description=?, address=?, city=?, country=?, price_per_night=?, property_type=?, num_bedrooms=?, num_bathrooms=?, max_guests=?, amenities=?, updated_at=?
             WHERE listing_id=?
             RETURNING *"
        )
            .bind(listing.host_id.to_string()).bind(&listing.title).bind(&listing.description)
            .bind(&listing.address).bind(&listing.city).bind(&listing.country)
            .bind(listing.price_per_night.to_string()).bind(listing.property_type.as_str())
            .bind(listing.num_bedrooms).bind(listing.num_bathrooms).bind(listing.max_guests)
            .bind(&listing.amenities).bind(listing.updated_at)
            .bind(listing.listing_id.to_string())
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Listing not found".into()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let id = id.to_string();
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM reviews WHERE listing_id = ?").bind(&id).execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM bookings WHERE listing_id = ?").bind(&id).execute(&mut *tx).await.map_err(AppError::Database)?;
        let result = sqlx::query("DELETE FROM listings WHERE listing_id = ?").bind(&id).execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 { return Err(AppError::NotFound("Listing not found".into())); }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM reviews").execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM bookings").execute(&mut *tx).await.map_err(AppError::Database)?;
        let result = sqlx::query("DELETE FROM listings").execute(&mut *tx).await.map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
