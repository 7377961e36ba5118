use super::trimmed;
use crate::models::{ExerciseEntry, LogFilter, User};
use crate::utils::{format_date, parse_optional_date, serialize_duration};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// The user's identity plus the entry that was just appended.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, entry: ExerciseEntry) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            description: entry.description,
            duration: entry.duration,
            date: format_date(entry.date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<&ExerciseEntry> for LogEntryResponse {
    fn from(entry: &ExerciseEntry) -> Self {
        Self {
            description: entry.description.clone(),
            duration: entry.duration,
            date: format_date(entry.date),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQueryParams {
    pub fn into_filter(self) -> Result<LogFilter, AppError> {
        let bad_request = |e: crate::utils::InvalidDate| AppError::BadRequest(anyhow::anyhow!(e));

        let from = parse_optional_date(self.from.as_deref()).map_err(bad_request)?;
        let to = parse_optional_date(self.to.as_deref()).map_err(bad_request)?;

        let limit = match self.limit.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
                AppError::BadRequest(anyhow::anyhow!("Invalid limit: {}", raw))
            })?),
        };

        Ok(LogFilter { from, to, limit })
    }
}

#[derive(Debug, Serialize)]
pub struct LogReportResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

impl LogReportResponse {
    pub fn new(user: &User, filter: &LogFilter) -> Self {
        let log: Vec<LogEntryResponse> = filter
            .apply(&user.logs)
            .into_iter()
            .map(LogEntryResponse::from)
            .collect();

        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            count: log.len(),
            log,
        }
    }
}
