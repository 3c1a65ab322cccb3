use events_commands::TrackEventCommand;
use events_command_handlers::TrackEventHandler;
use metrics_query_handlers::{
    ProductSalesQueryHandler, UsageMetricsQueryHandler,
};
use purchases::RecordPurchaseCommand;
use purchases_command_handlers::RecordPurchaseHandler;
use purchases_dao::PurchaseDao;
use redis_connection::connection::RedisConnectionManager;
use test_utils::*;
use users_command_handlers::RegisterUserHandler;
use users_commands::RegisterUserCommand;
use users_dao::ApiKeyDao;
use users_queries::GetApiKeyQuery;
use users_query_handlers::GetApiKeyQueryHandler;

pub struct IntegrationTestSetup {
    pub container: TestPostgresContainer,
    pub redis_container: TestRedisContainer,
    pub register_handler: RegisterUserHandler,
    pub get_api_key_handler: GetApiKeyQueryHandler,
    pub track_handler: TrackEventHandler,
    pub purchase_handler: RecordPurchaseHandler,
    pub usage_metrics_handler: UsageMetricsQueryHandler,
    pub product_sales_handler: ProductSalesQueryHandler,
    pub api_key_dao: ApiKeyDao,
    pub purchase_dao: PurchaseDao,
}

impl IntegrationTestSetup {
    pub async fn new() -> anyhow::Result<Self> {
        let container = TestPostgresContainer::new().await?;
        let redis_container = TestRedisContainer::new().await?;

        let sql_connect = create_sql_connect(&container);
        let redis =
            RedisConnectionManager::new(redis_container.pool.clone());

        Ok(Self {
            register_handler: RegisterUserHandler::new(sql_connect.clone()),
            get_api_key_handler: GetApiKeyQueryHandler::new(
                sql_connect.clone(),
            ),
            track_handler: TrackEventHandler::new_with_redis(
                sql_connect.clone(),
                redis.clone(),
            ),
            purchase_handler: RecordPurchaseHandler::new_with_redis(
                sql_connect.clone(),
                redis.clone(),
            ),
            usage_metrics_handler: UsageMetricsQueryHandler::new_with_redis(
                sql_connect.clone(),
                redis.clone(),
            ),
            product_sales_handler:
                ProductSalesQueryHandler::new_with_redis(redis),
            api_key_dao: ApiKeyDao::new(sql_connect.clone()),
            purchase_dao: PurchaseDao::new(sql_connect),
            container,
            redis_container,
        })
    }
}

#[tokio::test]
async fn test_register_then_look_up_api_key() {
    let setup = IntegrationTestSetup::new().await.unwrap();
    let user_id = unique_user_id();

    let issued = setup
        .register_handler
        .execute(RegisterUserCommand {
            user_id: user_id.clone(),
        })
        .await
        .unwrap();

    let looked_up = setup
        .get_api_key_handler
        .execute(GetApiKeyQuery {
            user_id: user_id.clone(),
        })
        .await
        .unwrap();

    assert_eq!(issued.api_key, looked_up.api_key);
    assert!(
        setup
            .api_key_dao
            .exists(&issued.api_key)
            .await
            .unwrap()
    );
    assert!(
        !setup
            .api_key_dao
            .exists("not-a-registered-key")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_tracked_page_views_show_up_in_metrics() {
    let setup = IntegrationTestSetup::new().await.unwrap();
    let user_id = create_test_user(&setup.container).await.unwrap();

    let before = setup.usage_metrics_handler.execute().await.unwrap();

    // `page_view` events hit the exact counter the dashboard reads
    for _ in 0..3 {
        setup
            .track_handler
            .execute(TrackEventCommand {
                user_id: user_id.clone(),
                event_type: "page_view".to_string(),
            })
            .await
            .unwrap();
    }

    let after = setup.usage_metrics_handler.execute().await.unwrap();
    assert_eq!(after.postgres_events - before.postgres_events, 3);
    assert!(after.redis_pageviews - before.redis_pageviews >= 3);
}

#[tokio::test]
async fn test_purchases_show_up_in_product_sales() {
    let setup = IntegrationTestSetup::new().await.unwrap();
    let user_id = create_test_user(&setup.container).await.unwrap();

    let before = setup.product_sales_handler.execute().await.unwrap();
    let bananas_before = before.0.get("bananas").copied().unwrap_or(0);
    let purchases_before = setup.purchase_dao.count().await.unwrap();

    setup
        .purchase_handler
        .execute(RecordPurchaseCommand {
            user_id: user_id.clone(),
            product_id: "bananas".to_string(),
            quantity: Some(2),
        })
        .await
        .unwrap();
    setup
        .purchase_handler
        .execute(RecordPurchaseCommand {
            user_id,
            product_id: "bananas".to_string(),
            quantity: None,
        })
        .await
        .unwrap();

    let after = setup.product_sales_handler.execute().await.unwrap();
    let bananas_after = after.0.get("bananas").copied().unwrap_or(0);
    assert_eq!(bananas_after - bananas_before, 3);

    let purchases_after = setup.purchase_dao.count().await.unwrap();
    assert_eq!(purchases_after - purchases_before, 2);
}

#[tokio::test]
async fn test_metrics_reads_are_independent() {
    let setup = IntegrationTestSetup::new().await.unwrap();

    // A user who generated rows but never page views, and counter traffic
    // with no rows behind it: both reads move independently.
    let user_id = create_test_user(&setup.container).await.unwrap();
    let before = setup.usage_metrics_handler.execute().await.unwrap();

    create_test_event(&setup.container, &user_id, "signup")
        .await
        .unwrap();
    setup
        .redis_container
        .incr_by("counter:page_view", 10)
        .await
        .unwrap();

    let after = setup.usage_metrics_handler.execute().await.unwrap();
    assert_eq!(after.postgres_events - before.postgres_events, 1);
    assert_eq!(after.redis_pageviews - before.redis_pageviews, 10);
}
