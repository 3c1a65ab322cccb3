use axum::{Router, extract::State, response::Json, routing::get};
use common_errors::AppError;
use metrics::UsageMetricsResponse;
use metrics_query_handlers::UsageMetricsQueryHandler;
use redis_connection::connection::RedisConnectionManager;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct MetricsServices {
    pub usage: UsageMetricsQueryHandler,
}

impl MetricsServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            usage: UsageMetricsQueryHandler::new(db),
        }
    }

    pub fn new_with_redis(
        db: SqlConnect, redis: RedisConnectionManager,
    ) -> Self {
        Self {
            usage: UsageMetricsQueryHandler::new_with_redis(db, redis),
        }
    }
}

pub struct MetricsHandlers;

impl MetricsHandlers {
    pub fn routes() -> Router<MetricsServices> {
        Router::new().route("/metrics", get(get_metrics))
    }
}

/// The dashboard polls this endpoint every two seconds.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Current usage counts", body = UsageMetricsResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "metrics"
)]
#[instrument(skip_all)]
pub async fn get_metrics(
    State(services): State<MetricsServices>,
) -> Result<Json<UsageMetricsResponse>, AppError> {
    let metrics = services.usage.execute().await?;
    Ok(Json(metrics))
}
