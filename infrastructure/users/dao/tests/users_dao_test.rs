use database_traits::dao::GenericDao;
use test_utils::*;
use users_commands::RegisterUserCommand;
use users_dao::{ApiKeyDao, UserDao};
use users_errors::UserError;

async fn setup() -> anyhow::Result<(TestPostgresContainer, UserDao)> {
    let container = TestPostgresContainer::new().await?;
    let dao = UserDao::new(create_sql_connect(&container));
    Ok((container, dao))
}

#[tokio::test]
async fn test_create_and_find_user() {
    let (_container, dao) = setup().await.unwrap();
    let user_id = unique_user_id();

    let created = dao
        .create(RegisterUserCommand {
            user_id: user_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(created.user_id, user_id);

    let found = dao.find_by_id(user_id.clone()).await.unwrap();
    assert_eq!(found.user_id, user_id);
    assert_eq!(found.registered_at, created.registered_at);
}

#[tokio::test]
async fn test_create_duplicate_user() {
    let (_container, dao) = setup().await.unwrap();
    let user_id = unique_user_id();

    dao.create(RegisterUserCommand {
        user_id: user_id.clone(),
    })
    .await
    .unwrap();

    let err = dao
        .create(RegisterUserCommand { user_id })
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::AlreadyExists));
}

#[tokio::test]
async fn test_find_unknown_user() {
    let (_container, dao) = setup().await.unwrap();

    let err = dao
        .find_by_id("never-registered".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::NotFound { .. }));
}

#[tokio::test]
async fn test_user_count_grows() {
    let (container, dao) = setup().await.unwrap();

    let before = dao.count().await.unwrap();
    create_test_user(&container).await.unwrap();
    let after = dao.count().await.unwrap();

    assert_eq!(after - before, 1);
}

#[tokio::test]
async fn test_api_key_lifecycle() {
    let (container, _dao) = setup().await.unwrap();
    let api_key_dao = ApiKeyDao::new(create_sql_connect(&container));
    let user_id = create_test_user(&container).await.unwrap();

    assert!(
        api_key_dao
            .find_by_user_id(&user_id)
            .await
            .unwrap()
            .is_none()
    );

    let inserted =
        api_key_dao.insert(&user_id, "abc123def456").await.unwrap();
    assert_eq!(inserted.user_id, user_id);

    let found = api_key_dao
        .find_by_user_id(&user_id)
        .await
        .unwrap()
        .expect("key stored");
    assert_eq!(found.api_key, "abc123def456");

    assert!(api_key_dao.exists("abc123def456").await.unwrap());
    assert!(!api_key_dao.exists("something-else").await.unwrap());
}
