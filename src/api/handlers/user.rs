use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateUserRequest;
use crate::api::dtos::responses::UserResponse;
use crate::domain::models::user::{NewUserParams, User};
use crate::domain::services::passwords::hash_password;
use std::sync::Arc;
use crate::error::AppError;
use tracing::{info, error};
use uuid::Uuid;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&payload.password)?;

    let user = User::new(NewUserParams {
        username: payload.username,
        email: payload.email,
        password_hash,
        first_name: payload.first_name,
        last_name: payload.last_name,
        role: payload.role,
    });
    let created = state.user_repo.create(&user).await?;

    info!("Created user: {} ({})", created.email, created.role);
    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(body))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    match state.user_repo.delete(user_id).await {
        Ok(_) => {
            info!("Deleted user {} and everything that referenced it", user_id);
            Ok(Json(serde_json::json!({"status": "deleted"})))
        },
        Err(e) => {
            error!("Failed to delete user {}: {:?}", user_id, e);
            Err(e)
        }
    }
}
