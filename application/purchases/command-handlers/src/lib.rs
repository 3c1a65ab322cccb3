use metrics::counter_keys::ProductSalesCounterKey;
use purchases::{
    PurchaseError, RecordPurchaseCommand, is_catalog_product,
    responses::PurchaseResponse,
};
use purchases_dao::PurchaseDao;
use redis_connection::{
    connection::RedisConnectionManager, counter::CounterBind,
};
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct RecordPurchaseHandler {
    purchase_dao: PurchaseDao,
    redis: RedisConnectionManager,
}

impl RecordPurchaseHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            purchase_dao: PurchaseDao::new(db),
            redis: RedisConnectionManager::from_static(),
        }
    }

    pub fn new_with_redis(
        db: SqlConnect, redis: RedisConnectionManager,
    ) -> Self {
        Self {
            purchase_dao: PurchaseDao::new(db),
            redis,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: RecordPurchaseCommand,
    ) -> Result<PurchaseResponse, PurchaseError> {
        if !is_catalog_product(&command.product_id) {
            return Err(PurchaseError::UnknownProduct {
                product_id: command.product_id,
            });
        }

        let quantity = command.normalized_quantity();
        let purchase = self
            .purchase_dao
            .insert(&command.user_id, &command.product_id, quantity)
            .await?;

        let mut conn = self.redis.get_connection().await?;
        let total_sold = ProductSalesCounterKey
            .bind_with(&mut conn, &purchase.product_id)
            .incr_by(quantity as i64)
            .await?;

        Ok(PurchaseResponse::from_purchase(purchase, total_sold))
    }
}

#[cfg(test)]
mod tests {
    use test_utils::*;

    use super::*;

    async fn setup() -> anyhow::Result<(
        TestPostgresContainer,
        TestRedisContainer,
        RecordPurchaseHandler,
    )> {
        let container = TestPostgresContainer::new().await?;
        let redis_container = TestRedisContainer::new().await?;

        let handler = RecordPurchaseHandler::new_with_redis(
            create_sql_connect(&container),
            RedisConnectionManager::new(redis_container.pool.clone()),
        );
        Ok((container, redis_container, handler))
    }

    #[tokio::test]
    async fn test_purchase_outside_catalog_is_rejected() {
        let (_container, _redis_container, handler) = setup().await.unwrap();

        let err = handler
            .execute(RecordPurchaseCommand {
                user_id: unique_user_id(),
                product_id: "durians".to_string(),
                quantity: Some(2),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PurchaseError::UnknownProduct { .. }));
    }

    #[tokio::test]
    async fn test_purchase_increments_sales_counter_by_quantity() {
        let (_container, redis_container, handler) = setup().await.unwrap();
        redis_container.flush_db().await.unwrap();

        let first = handler
            .execute(RecordPurchaseCommand {
                user_id: unique_user_id(),
                product_id: "oranges".to_string(),
                quantity: Some(4),
            })
            .await
            .unwrap();
        assert_eq!(first.quantity, 4);
        assert_eq!(first.total_sold, 4);

        let second = handler
            .execute(RecordPurchaseCommand {
                user_id: unique_user_id(),
                product_id: "oranges".to_string(),
                quantity: None,
            })
            .await
            .unwrap();
        assert_eq!(second.quantity, 1);
        assert_eq!(second.total_sold, 5);
    }
}
