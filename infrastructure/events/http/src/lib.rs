use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::post,
};
use common_errors::AppError;
use events_command_handlers::TrackEventHandler;
use events_commands::TrackEventCommand;
use events_responses::TrackedEventResponse;
use redis_connection::connection::RedisConnectionManager;
use serde::Deserialize;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_http::ApiKeyAuth;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct EventServices {
    pub track: TrackEventHandler,
}

impl EventServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            track: TrackEventHandler::new(db),
        }
    }

    pub fn new_with_redis(
        db: SqlConnect, redis: RedisConnectionManager,
    ) -> Self {
        Self {
            track: TrackEventHandler::new_with_redis(db, redis),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new().route("/track", post(track_event))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TrackParams {
    pub event: Option<String>,
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/track",
    params(TrackParams),
    responses(
        (status = 201, description = "Event recorded and counted", body = TrackedEventResponse),
        (status = 400, description = "Missing event or user_id", body = common_errors::ApiErrorResponse),
        (status = 401, description = "Missing or unknown API key", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn track_event(
    _auth: ApiKeyAuth, State(services): State<EventServices>,
    Query(params): Query<TrackParams>,
) -> Result<(StatusCode, Json<TrackedEventResponse>), AppError> {
    let (Some(event_type), Some(user_id)) = (
        params.event.filter(|e| !e.is_empty()),
        params.user_id.filter(|u| !u.is_empty()),
    )
    else {
        return Err(AppError::bad_request(
            "MISSING_PARAMS",
            "Missing event or user_id",
        ));
    };

    let result = services
        .track
        .execute(TrackEventCommand {
            user_id,
            event_type,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}
