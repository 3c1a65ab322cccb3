use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseResponse {
    pub id: i64,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub purchased_at: DateTime<Utc>,
    /// Value of `sales:product:<product_id>` after this purchase was counted
    pub total_sold: i64,
}

impl PurchaseResponse {
    pub fn from_purchase(
        purchase: crate::models::Purchase, total_sold: i64,
    ) -> Self {
        Self {
            id: purchase.id,
            user_id: purchase.user_id,
            product_id: purchase.product_id,
            quantity: purchase.quantity,
            purchased_at: purchase.purchased_at,
            total_sold,
        }
    }
}

/// Serialized as a bare `{"<product_id>": <units_sold>}` map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSalesResponse(pub BTreeMap<String, i64>);
