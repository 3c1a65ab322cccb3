use deadpool_redis::{Config, CreatePoolError, Pool, Runtime};
pub use deadpool_redis::{
    PoolError,
    redis::{FromRedisValue, cmd},
};
pub use redis::{AsyncCommands, RedisError};
use tracing::{info, instrument};
use url::Url;
pub mod config;
pub mod connection;
pub mod counter;

#[instrument(skip_all, name = "connect-redis")]
pub async fn connect_redis_db<C>(config: &C) -> Result<Pool, CreatePoolError>
where
    C: config::DbConnectConfig,
{
    let mut url = Url::parse("redis://").unwrap();

    url.set_host(Some(config.host())).unwrap();
    url.set_port(config.port().into()).unwrap();
    url.path_segments_mut()
        .unwrap()
        .extend(&[config.db().to_string()]);

    info!(redis.url = %url, redis.connect = true);

    let cfg = Config {
        url: Some(url.to_string()),
        pool: Some(deadpool_redis::PoolConfig::default()),
        connection: None,
    };

    let pool = cfg.create_pool(Some(Runtime::Tokio1))?;
    Ok(pool)
}
