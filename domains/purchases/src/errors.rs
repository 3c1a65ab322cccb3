use common_errors::AppError;
use redis_connection::{PoolError, RedisError};
use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("Unknown product: {product_id}")]
    UnknownProduct { product_id: String },
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),
    #[error("Redis Pool error: {0}")]
    RedisPool(#[from] PoolError),
}

impl From<PurchaseError> for AppError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::UnknownProduct { product_id } => {
                AppError::bad_request_with_details(
                    "INVALID_PRODUCT_ID",
                    "Invalid product_id: must be apples, oranges, or bananas",
                    &format!("got '{product_id}'"),
                )
            }
            PurchaseError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            PurchaseError::DatabasePool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
            PurchaseError::Redis(redis_err) => {
                AppError::internal_server_error(&format!(
                    "Counter error: {redis_err}"
                ))
            }
            PurchaseError::RedisPool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Counter connection error: {pool_err}"
                ))
            }
        }
    }
}
