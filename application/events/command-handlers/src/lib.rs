use events_commands::TrackEventCommand;
use events_dao::EventDao;
use events_errors::EventError;
use events_responses::TrackedEventResponse;
use metrics::counter_keys::EventCounterKey;
use redis_connection::{
    connection::RedisConnectionManager, counter::CounterBind,
};
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct TrackEventHandler {
    event_dao: EventDao,
    redis: RedisConnectionManager,
}

impl TrackEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
            redis: RedisConnectionManager::from_static(),
        }
    }

    pub fn new_with_redis(
        db: SqlConnect, redis: RedisConnectionManager,
    ) -> Self {
        Self {
            event_dao: EventDao::new(db),
            redis,
        }
    }

    /// Durable insert first, then the live counter. A Redis failure after
    /// the insert surfaces as an error even though the row is kept.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: TrackEventCommand,
    ) -> Result<TrackedEventResponse, EventError> {
        let event = self
            .event_dao
            .insert(&command.user_id, &command.event_type)
            .await?;

        let mut conn = self.redis.get_connection().await?;
        let total_count = EventCounterKey
            .bind_with(&mut conn, &event.event_type)
            .incr()
            .await?;

        Ok(TrackedEventResponse::from_event(event, total_count))
    }
}
