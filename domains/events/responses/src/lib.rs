use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackedEventResponse {
    pub id: i64,
    pub user_id: String,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    /// Value of `counter:<event_type>` after this event was counted
    pub total_count: i64,
}

impl TrackedEventResponse {
    pub fn from_event(event: events_models::Event, total_count: i64) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            event_type: event.event_type,
            occurred_at: event.occurred_at,
            total_count,
        }
    }
}
