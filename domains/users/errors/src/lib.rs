use common_errors::AppError;
use sql_connection::{PgError, PoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {user_id}")]
    NotFound { user_id: String },
    #[error("API key not found for user: {user_id}")]
    ApiKeyNotFound { user_id: String },
    #[error("User with this id already exists")]
    AlreadyExists,
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] PoolError),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound { user_id } => {
                AppError::not_found(
                    "USER_NOT_FOUND",
                    &format!("User '{user_id}' not found"),
                )
            }
            UserError::ApiKeyNotFound { user_id } => {
                AppError::not_found(
                    "API_KEY_NOT_FOUND",
                    &format!("No API key registered for user '{user_id}'"),
                )
            }
            UserError::AlreadyExists => {
                AppError::unprocessable_entity(
                    "USER_EXISTS",
                    "A user with this id is already registered",
                )
            }
            UserError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            UserError::DatabasePool(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
        }
    }
}
