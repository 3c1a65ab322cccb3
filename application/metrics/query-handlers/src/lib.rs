use std::collections::BTreeMap;

use events_dao::EventDao;
use metrics::{
    MetricsError, UsageMetricsResponse,
    counter_keys::{PageViewCounterKey, ProductSalesCounterKey},
};
use purchases::{PRODUCT_CATALOG, responses::ProductSalesResponse};
use redis_connection::{
    connection::RedisConnectionManager, counter::CounterBind,
};
use sql_connection::SqlConnect;
use tracing::instrument;

/// The two point reads behind `GET /metrics`. They are independent; a
/// failure of either fails the request as a whole.
#[derive(Clone)]
pub struct UsageMetricsQueryHandler {
    event_dao: EventDao,
    redis: RedisConnectionManager,
}

impl UsageMetricsQueryHandler {
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

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<UsageMetricsResponse, MetricsError> {
        let postgres_events = self.event_dao.count_events().await?;

        let mut conn = self.redis.get_connection().await?;
        let redis_pageviews =
            PageViewCounterKey.bind(&mut conn).get_or_zero().await?;

        Ok(UsageMetricsResponse {
            postgres_events,
            redis_pageviews,
        })
    }
}

#[derive(Clone)]
pub struct ProductSalesQueryHandler {
    redis: RedisConnectionManager,
}

impl ProductSalesQueryHandler {
    pub fn new() -> Self {
        Self {
            redis: RedisConnectionManager::from_static(),
        }
    }

    pub fn new_with_redis(redis: RedisConnectionManager) -> Self {
        Self { redis }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<ProductSalesResponse, MetricsError> {
        let mut conn = self.redis.get_connection().await?;

        let mut sales = BTreeMap::new();
        for product_id in PRODUCT_CATALOG {
            let product = product_id.to_string();
            let sold = ProductSalesCounterKey
                .bind_with(&mut conn, &product)
                .get_or_zero()
                .await?;
            sales.insert(product, sold);
        }

        Ok(ProductSalesResponse(sales))
    }
}

impl Default for ProductSalesQueryHandler {
    fn default() -> Self { Self::new() }
}
