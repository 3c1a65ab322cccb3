use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Purchase {
    pub id: i64,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub purchased_at: DateTime<Utc>,
}
