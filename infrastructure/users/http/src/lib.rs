pub mod auth;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use common_errors::AppError;
use serde::Deserialize;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_command_handlers::RegisterUserHandler;
use users_commands::RegisterUserCommand;
use users_queries::GetApiKeyQuery;
use users_query_handlers::{GetApiKeyQueryHandler, ListUsersQueryHandler};
use users_responses::{ApiKeyResponse, UserResponse};
use utoipa::{IntoParams, ToSchema};

pub use crate::auth::ApiKeyAuth;

#[derive(Clone)]
pub struct UserServices {
    pub register: RegisterUserHandler,
    pub get_api_key: GetApiKeyQueryHandler,
    pub list_users: ListUsersQueryHandler,
}

impl UserServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            register: RegisterUserHandler::new(db.clone()),
            get_api_key: GetApiKeyQueryHandler::new(db.clone()),
            list_users: ListUsersQueryHandler::new(db),
        }
    }
}

pub struct UserHandlers;

impl UserHandlers {
    pub fn routes() -> Router<UserServices> {
        Router::new()
            .route("/register", post(register_user))
            .route("/get-api-key", get(get_api_key))
            .route("/users", get(list_users))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RegisterParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct GetApiKeyParams {
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/register",
    params(RegisterParams),
    responses(
        (status = 201, description = "User registered, API key issued", body = ApiKeyResponse),
        (status = 400, description = "Missing user_id", body = common_errors::ApiErrorResponse),
        (status = 422, description = "User already registered", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(services): State<UserServices>,
    Query(params): Query<RegisterParams>,
) -> Result<(StatusCode, Json<ApiKeyResponse>), AppError> {
    let user_id = params.user_id.filter(|id| !id.is_empty()).ok_or_else(
        || AppError::bad_request("MISSING_USER_ID", "Missing user_id"),
    )?;

    let result = services
        .register
        .execute(RegisterUserCommand { user_id })
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/get-api-key",
    params(GetApiKeyParams),
    responses(
        (status = 200, description = "API key for the user", body = ApiKeyResponse),
        (status = 400, description = "Missing user_id", body = common_errors::ApiErrorResponse),
        (status = 404, description = "User has no API key", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn get_api_key(
    State(services): State<UserServices>,
    Query(params): Query<GetApiKeyParams>,
) -> Result<Json<ApiKeyResponse>, AppError> {
    let user_id = params.user_id.filter(|id| !id.is_empty()).ok_or_else(
        || AppError::bad_request("MISSING_USER_ID", "Missing user_id"),
    )?;

    let key = services
        .get_api_key
        .execute(GetApiKeyQuery { user_id })
        .await?;
    Ok(Json(key))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Registered users, newest first", body = Vec<UserResponse>),
        (status = 401, description = "Missing or unknown API key", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn list_users(
    _auth: ApiKeyAuth, State(services): State<UserServices>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = services.list_users.execute().await?;
    Ok(Json(users))
}
