use super::trimmed;
use crate::models::{User, UserSummary};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserListItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<UserSummary> for UserListItem {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            username: summary.username,
        }
    }
}
