use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackEventCommand {
    pub user_id: String,
    pub event_type: String,
}
