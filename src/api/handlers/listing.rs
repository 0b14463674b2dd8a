use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateListingRequest, UpdateListingRequest};
use crate::api::dtos::responses::ListingResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.catalog_service.create_listing(payload.into()).await?;
    let detail = state.catalog_service.listing_detail(created).await?;
    Ok((StatusCode::CREATED, Json(ListingResponse::from(detail))))
}

pub async fn list_listings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let listings = state.listing_repo.list().await?;

    let mut body = Vec::with_capacity(listings.len());
    for listing in listings {
        let detail = state.catalog_service.listing_detail(listing).await?;
        body.push(ListingResponse::from(detail));
    }
    Ok(Json(body))
}

pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listing = state.listing_repo.find_by_id(listing_id).await?
        .ok_or(AppError::NotFound("Listing not found".into()))?;
    let detail = state.catalog_service.listing_detail(listing).await?;
    Ok(Json(ListingResponse::from(detail)))
}

pub async fn update_listing(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<Uuid>,
    Json(payload): Json<UpdateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut listing = state.listing_repo.find_by_id(listing_id).await?
        .ok_or(AppError::NotFound("Listing not found".into()))?;

    payload.apply(&mut listing);

    let updated = state.catalog_service.update_listing(listing).await?;
    let detail = state.catalog_service.listing_detail(updated).await?;
    Ok(Json(ListingResponse::from(detail)))
}

pub async fn delete_listing(
    State(state): State<Arc<AppState>>,
    Path(listing_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.listing_repo.delete(listing_id).await?;
    info!("Deleted listing {} with its bookings and reviews", listing_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
