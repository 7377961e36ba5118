use crate::dtos::{
    CreateExerciseRequest, ExerciseResponse, LogEntryResponse, LogQueryParams, LogReportResponse,
};
use crate::models::{ExerciseEntry, User};
use crate::services::metrics::record_exercise_logged;
use crate::utils::{parse_duration, parse_optional_date, today, ValidatedForm};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use service_core::error::AppError;

fn user_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("User not found"))
}

async fn load_user(state: &AppState, user_id: &str) -> Result<User, AppError> {
    state
        .users
        .find_user(user_id)
        .await?
        .ok_or_else(user_not_found)
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedForm(payload): ValidatedForm<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let duration =
        parse_duration(&payload.duration).map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;
    let date = parse_optional_date(payload.date.as_deref())
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?
        .unwrap_or_else(today);

    let entry = ExerciseEntry::new(payload.description, duration, date);

    let user = state
        .users
        .append_exercise(&user_id, entry.clone())
        .await?
        .ok_or_else(user_not_found)?;

    tracing::info!(
        user_id = %user.id,
        duration = duration,
        date = %date,
        "Exercise logged"
    );
    record_exercise_logged();

    Ok(Json(ExerciseResponse::new(&user, entry)))
}

pub async fn list_exercises(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<LogEntryResponse>>, AppError> {
    let user = load_user(&state, &user_id).await?;

    Ok(Json(user.logs.iter().map(LogEntryResponse::from).collect()))
}

pub async fn exercise_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> Result<Json<LogReportResponse>, AppError> {
    let filter = params.into_filter()?;
    let user = load_user(&state, &user_id).await?;

    tracing::debug!(
        user_id = %user.id,
        from = ?filter.from,
        to = ?filter.to,
        limit = ?filter.limit,
        "Building exercise log report"
    );

    Ok(Json(LogReportResponse::new(&user, &filter)))
}
