use database_traits::dao::GenericDao;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_dao::{ApiKeyDao, UserDao};
use users_errors::UserError;
use users_queries::GetApiKeyQuery;
use users_responses::{ApiKeyResponse, UserResponse};

#[derive(Clone)]
pub struct GetApiKeyQueryHandler {
    api_key_dao: ApiKeyDao,
}

impl GetApiKeyQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            api_key_dao: ApiKeyDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetApiKeyQuery,
    ) -> Result<ApiKeyResponse, UserError> {
        let key = self
            .api_key_dao
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or(UserError::ApiKeyNotFound {
                user_id: query.user_id,
            })?;

        Ok(key.into())
    }
}

#[derive(Clone)]
pub struct ListUsersQueryHandler {
    user_dao: UserDao,
}

impl ListUsersQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            user_dao: UserDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<UserResponse>, UserError> {
        self.user_dao.all().await
    }
}

#[cfg(test)]
mod tests {
    use test_utils::*;
    use users_queries::GetApiKeyQuery;

    use super::*;

    #[tokio::test]
    async fn test_get_api_key_for_registered_user() {
        let container = TestPostgresContainer::new().await.unwrap();
        let user_id = create_test_user(&container).await.unwrap();
        let api_key =
            create_test_api_key(&container, &user_id).await.unwrap();

        let handler =
            GetApiKeyQueryHandler::new(create_sql_connect(&container));
        let result = handler
            .execute(GetApiKeyQuery {
                user_id: user_id.clone(),
            })
            .await
            .unwrap();

        assert_eq!(result.user_id, user_id);
        assert_eq!(result.api_key, api_key);
    }

    #[tokio::test]
    async fn test_get_api_key_for_unknown_user() {
        let container = TestPostgresContainer::new().await.unwrap();

        let handler =
            GetApiKeyQueryHandler::new(create_sql_connect(&container));
        let err = handler
            .execute(GetApiKeyQuery {
                user_id: "nobody".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::ApiKeyNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_users_newest_first() {
        let container = TestPostgresContainer::new().await.unwrap();
        let first = create_test_user(&container).await.unwrap();
        let second = create_test_user(&container).await.unwrap();

        let handler =
            ListUsersQueryHandler::new(create_sql_connect(&container));
        let users = handler.execute().await.unwrap();

        let first_pos = users
            .iter()
            .position(|u| u.user_id == first)
            .expect("first user listed");
        let second_pos = users
            .iter()
            .position(|u| u.user_id == second)
            .expect("second user listed");
        assert!(second_pos < first_pos);
    }
}
