use crate::dtos::{CreateUserRequest, CreateUserResponse, UserListItem};
use crate::models::User;
use crate::services::metrics::record_user_created;
use crate::utils::ValidatedForm;
use crate::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedForm(payload): ValidatedForm<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let user = state.users.create_user(User::new(payload.username)).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");
    record_user_created();

    Ok(Json(CreateUserResponse::from(user)))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserListItem>>, AppError> {
    let users = state.users.list_users().await?;

    tracing::debug!(count = users.len(), "Listing users");

    Ok(Json(users.into_iter().map(UserListItem::from).collect()))
}
