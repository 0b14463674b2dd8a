use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateReviewRequest;
use crate::api::dtos::responses::ReviewResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.catalog_service.create_review(payload.into()).await?;
    let mut details = state.catalog_service.review_details(vec![created]).await?;
    let detail = details.pop().ok_or(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(ReviewResponse::from(detail))))
}

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state.review_repo.list().await?;
    let details = state.catalog_service.review_details(reviews).await?;
    let body: Vec<ReviewResponse> = details.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(body))
}

pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.review_repo.find_by_id(review_id).await?
        .ok_or(AppError::NotFound("Review not found".into()))?;
    let detail = state.catalog_service.review_details(vec![review]).await?
        .pop()
        .ok_or(AppError::Internal)?;
    Ok(Json(ReviewResponse::from(detail)))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.review_repo.delete(review_id).await?;
    info!("Deleted review: {}", review_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
