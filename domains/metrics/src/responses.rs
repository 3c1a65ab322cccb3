use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The dashboard payload: two independent point reads, one per store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsageMetricsResponse {
    /// `SELECT COUNT(*) FROM events`
    pub postgres_events: i64,
    /// `GET counter:page_view`, zero when the key does not exist
    pub redis_pageviews: i64,
}
