use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordPurchaseCommand {
    pub user_id: String,
    pub product_id: String,
    pub quantity: Option<i32>,
}

impl RecordPurchaseCommand {
    /// Quantity as recorded: missing or non-positive values collapse to 1
    pub fn normalized_quantity(&self) -> i32 {
        match self.quantity {
            Some(q) if q > 0 => q,
            _ => 1,
        }
    }
}
