use std::sync::OnceLock;

use deadpool_redis::{Connection, Pool, PoolError};

static REDIS_POOL: OnceLock<Pool> = OnceLock::new();

#[derive(Clone)]
pub struct RedisConnectionManager {
    pool: Pool,
}

impl RedisConnectionManager {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub fn from_static() -> Self {
        let pool = REDIS_POOL
            .get()
            .expect("Redis pool not initialized")
            .clone();
        Self::new(pool)
    }

    pub fn init_static(pool: Pool) { REDIS_POOL.set(pool).ok(); }

    pub async fn get_connection(&self) -> Result<Connection, PoolError> {
        self.pool.get().await
    }
}
