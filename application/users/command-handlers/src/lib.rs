use database_traits::dao::GenericDao;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_commands::RegisterUserCommand;
use users_dao::{ApiKeyDao, UserDao};
use users_errors::UserError;
use users_responses::ApiKeyResponse;
use uuid::Uuid;

#[derive(Clone)]
pub struct RegisterUserHandler {
    user_dao: UserDao,
    api_key_dao: ApiKeyDao,
}

impl RegisterUserHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            user_dao: UserDao::new(db.clone()),
            api_key_dao: ApiKeyDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: RegisterUserCommand,
    ) -> Result<ApiKeyResponse, UserError> {
        let user = self.user_dao.create(command).await?;

        // 128 bits of entropy, hex-encoded
        let api_key = Uuid::new_v4().simple().to_string();
        let key = self.api_key_dao.insert(&user.user_id, &api_key).await?;

        Ok(key.into())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::*;

    use super::*;

    async fn setup() -> anyhow::Result<(TestPostgresContainer, RegisterUserHandler)>
    {
        let container = TestPostgresContainer::new().await?;
        let handler = RegisterUserHandler::new(create_sql_connect(&container));
        Ok((container, handler))
    }

    #[tokio::test]
    async fn test_register_returns_api_key() {
        let (_container, handler) = setup().await.unwrap();
        let user_id = unique_user_id();

        let result = handler
            .execute(RegisterUserCommand {
                user_id: user_id.clone(),
            })
            .await
            .unwrap();

        assert_eq!(result.user_id, user_id);
        assert_eq!(result.api_key.len(), 32);
        assert!(result.api_key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_register_twice_is_rejected() {
        let (_container, handler) = setup().await.unwrap();
        let user_id = unique_user_id();

        handler
            .execute(RegisterUserCommand {
                user_id: user_id.clone(),
            })
            .await
            .unwrap();

        let err = handler
            .execute(RegisterUserCommand { user_id })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_each_registration_gets_a_distinct_key() {
        let (_container, handler) = setup().await.unwrap();

        let first = handler
            .execute(RegisterUserCommand {
                user_id: unique_user_id(),
            })
            .await
            .unwrap();
        let second = handler
            .execute(RegisterUserCommand {
                user_id: unique_user_id(),
            })
            .await
            .unwrap();

        assert_ne!(first.api_key, second.api_key);
    }
}
