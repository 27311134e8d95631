use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::lax, models::UserRecord};

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "lax::int")]
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login accepts the same user shape as registration; only `username` and
/// `password` take part in the match.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lax::opt_int")]
    pub id: Option<i64>,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LoginResponse {
    Success { message: String },
    Failure { error: String },
}
