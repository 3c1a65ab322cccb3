use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: String,
    pub registered_at: DateTime<Utc>,
}

/// Returned by registration and API key lookup alike
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiKeyResponse {
    pub user_id: String,
    pub api_key: String,
}

impl From<users_models::User> for UserResponse {
    fn from(user: users_models::User) -> Self {
        Self {
            user_id: user.user_id,
            registered_at: user.registered_at,
        }
    }
}

impl From<users_models::ApiKey> for ApiKeyResponse {
    fn from(key: users_models::ApiKey) -> Self {
        Self {
            user_id: key.user_id,
            api_key: key.api_key,
        }
    }
}
