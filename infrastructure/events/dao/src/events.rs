use chrono::Utc;
use events_errors::EventError;
use events_models::Event;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct EventDao {
    db: SqlConnect,
}

impl EventDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    pub fn db(&self) -> &SqlConnect { &self.db }

    fn map_row(&self, row: &tokio_postgres::Row) -> Event {
        Event {
            id: row.get(0),
            user_id: row.get(1),
            event_type: row.get(2),
            occurred_at: row.get(3),
        }
    }

    #[instrument(skip(self))]
    pub async fn insert(
        &self, user_id: &str, event_type: &str,
    ) -> Result<Event, EventError> {
        let client = self.db.get_client().await?;
        let occurred_at = Utc::now();

        let stmt = client
            .prepare(
                "INSERT INTO events (user_id, event_type, occurred_at) \
                 VALUES ($1, $2, $3) \
                 RETURNING id, user_id, event_type, occurred_at",
            )
            .await?;
        let row = client
            .query_one(&stmt, &[&user_id, &event_type, &occurred_at])
            .await?;

        Ok(self.map_row(&row))
    }

    /// The aggregate the dashboard polls for
    #[instrument(skip(self))]
    pub async fn count_events(&self) -> Result<i64, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("SELECT COUNT(*) FROM events").await?;
        let row = client.query_one(&stmt, &[]).await?;

        Ok(row.get(0))
    }

    #[instrument(skip(self))]
    pub async fn count_by_type(
        &self, event_type: &str,
    ) -> Result<i64, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare("SELECT COUNT(*) FROM events WHERE event_type = $1")
            .await?;
        let row = client.query_one(&stmt, &[&event_type]).await?;

        Ok(row.get(0))
    }
}
