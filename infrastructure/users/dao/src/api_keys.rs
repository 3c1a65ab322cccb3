use sql_connection::SqlConnect;
use tracing::instrument;
use users_errors::UserError;
use users_models::ApiKey;

#[derive(Clone)]
pub struct ApiKeyDao {
    db: SqlConnect,
}

impl ApiKeyDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    #[instrument(skip(self, api_key))]
    pub async fn insert(
        &self, user_id: &str, api_key: &str,
    ) -> Result<ApiKey, UserError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "INSERT INTO api_keys (api_key, user_id) VALUES ($1, $2) \
                 RETURNING user_id, api_key",
            )
            .await?;
        let row = client.query_one(&stmt, &[&api_key, &user_id]).await?;

        Ok(ApiKey {
            user_id: row.get(0),
            api_key: row.get(1),
        })
    }

    #[instrument(skip(self))]
    pub async fn find_by_user_id(
        &self, user_id: &str,
    ) -> Result<Option<ApiKey>, UserError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT user_id, api_key FROM api_keys WHERE user_id = $1",
            )
            .await?;
        let rows = client.query(&stmt, &[&user_id]).await?;

        let key = rows.first().map(|row| {
            ApiKey {
                user_id: row.get(0),
                api_key: row.get(1),
            }
        });

        Ok(key)
    }

    #[instrument(skip_all)]
    pub async fn exists(&self, api_key: &str) -> Result<bool, UserError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT EXISTS(SELECT 1 FROM api_keys WHERE api_key = $1)",
            )
            .await?;
        let row = client.query_one(&stmt, &[&api_key]).await?;

        Ok(row.get(0))
    }
}
