use async_trait::async_trait;
use chrono::Utc;
use database_traits::dao::GenericDao;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_commands::RegisterUserCommand;
use users_errors::UserError;
use users_models::User;
use users_responses::UserResponse;

#[derive(Clone)]
pub struct UserDao {
    db: SqlConnect,
}

impl UserDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    pub fn db(&self) -> &SqlConnect { &self.db }
}

#[async_trait]
impl GenericDao for UserDao {
    type CreateRequest = RegisterUserCommand;
    type Error = UserError;
    type ID = String;
    type Model = User;
    type Response = UserResponse;

    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT user_id, registered_at FROM users WHERE user_id = $1",
            )
            .await?;
        let rows = client.query(&stmt, &[&id]).await?;

        let user = rows
            .first()
            .map(|row| self.map_row(row))
            .ok_or(UserError::NotFound { user_id: id })?;

        Ok(user.into())
    }

    async fn all(&self) -> Result<Vec<Self::Response>, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT user_id, registered_at FROM users \
                 ORDER BY registered_at DESC",
            )
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        let users = rows
            .iter()
            .map(|row| self.map_row(row).into())
            .collect();

        Ok(users)
    }

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let registered_at = Utc::now();

        // Existence check and insert in a single round trip
        let stmt = client
            .prepare(
                "WITH id_check AS (
                     SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1) \
                 as id_exists
                 ),
                 inserted AS (
                     INSERT INTO users (user_id, registered_at)
                     SELECT $1, $2
                     WHERE NOT EXISTS(SELECT 1 FROM id_check WHERE id_exists \
                 = true)
                     RETURNING user_id, registered_at
                 )
                 SELECT i.user_id, i.registered_at, c.id_exists
                 FROM id_check c
                 LEFT JOIN inserted i ON c.id_exists = false",
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&req.user_id, &registered_at])
            .await?;

        let id_exists: bool = row.get(2);
        if id_exists {
            return Err(UserError::AlreadyExists);
        }

        let user = User {
            user_id: row.get(0),
            registered_at: row.get(1),
        };
        Ok(user.into())
    }

    async fn count(&self) -> Result<i64, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("SELECT COUNT(*) FROM users").await?;
        let row = client.query_one(&stmt, &[]).await?;

        Ok(row.get(0))
    }

    fn map_row(&self, row: &tokio_postgres::Row) -> Self::Model {
        User {
            user_id: row.get(0),
            registered_at: row.get(1),
        }
    }
}

impl UserDao {
    #[instrument(skip(self))]
    pub async fn exists(&self, user_id: &str) -> Result<bool, UserError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
            .await?;
        let row = client.query_one(&stmt, &[&user_id]).await?;

        Ok(row.get(0))
    }
}
