use common_errors::AppError;
use events_errors::EventError;
use redis_connection::{PoolError, RedisError};
use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),
    #[error("Redis Pool error: {0}")]
    RedisPool(#[from] PoolError),
    #[error("Event store error: {0}")]
    Events(#[from] EventError),
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            MetricsError::DatabasePool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
            MetricsError::Redis(redis_err) => {
                AppError::internal_server_error(&format!(
                    "Counter error: {redis_err}"
                ))
            }
            MetricsError::RedisPool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Counter connection error: {pool_err}"
                ))
            }
            MetricsError::Events(event_err) => event_err.into(),
        }
    }
}
