use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateBookingRequest, UpdateBookingRequest};
use crate::api::dtos::responses::BookingResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (listing_id, params) = payload.into_parts();
    let created = state.catalog_service.create_booking(listing_id, params).await?;
    let detail = state.catalog_service.booking_detail(created).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(detail))))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list().await?;

    let mut body = Vec::with_capacity(bookings.len());
    for booking in bookings {
        body.push(BookingResponse::from(state.catalog_service.booking_detail(booking).await?));
    }
    Ok(Json(body))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    let detail = state.catalog_service.booking_detail(booking).await?;
    Ok(Json(BookingResponse::from(detail)))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.catalog_service.set_booking_status(booking_id, payload.status).await?;
    let detail = state.catalog_service.booking_detail(updated).await?;
    Ok(Json(BookingResponse::from(detail)))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(booking_id).await?;
    info!("Booking deleted: {}", booking_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
