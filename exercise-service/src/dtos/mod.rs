pub mod exercises;
pub mod users;

pub use exercises::{
    CreateExerciseRequest, ExerciseResponse, LogEntryResponse, LogQueryParams, LogReportResponse,
};
pub use users::{CreateUserRequest, CreateUserResponse, UserListItem};

use serde::{Deserialize, Deserializer};

/// Deserialize a form string with surrounding whitespace removed.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}
