//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chirp_core::domain::User;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login outcome. Always returned with a 200; a failed attempt carries the
/// generic message and no user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub message: String,
}

impl LoginResponse {
    pub fn matched(email: String, user_id: Uuid) -> Self {
        Self {
            email,
            user_id: Some(user_id),
            message: "Login successfully".to_string(),
        }
    }

    pub fn rejected(email: String) -> Self {
        Self {
            email,
            user_id: None,
            message: "Invalid email or password".to_string(),
        }
    }
}

/// Partial update of a stored user. Only the supplied fields are merged
/// onto the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Request to post a tweet. The author snapshot is embedded exactly as
/// supplied; it is not checked against the stored user collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTweetRequest {
    pub content: String,
    pub author: User,
}

/// Partial update of a tweet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTweetRequest {
    pub content: Option<String>,
}
