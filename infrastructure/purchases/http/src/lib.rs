use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use common_errors::AppError;
use metrics_query_handlers::ProductSalesQueryHandler;
use purchases::{
    RecordPurchaseCommand,
    responses::{ProductSalesResponse, PurchaseResponse},
};
use purchases_command_handlers::RecordPurchaseHandler;
use redis_connection::connection::RedisConnectionManager;
use serde::Deserialize;
use sql_connection::SqlConnect;
use tracing::instrument;
use users_http::ApiKeyAuth;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct PurchaseServices {
    pub record: RecordPurchaseHandler,
    pub product_sales: ProductSalesQueryHandler,
}

impl PurchaseServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            record: RecordPurchaseHandler::new(db),
            product_sales: ProductSalesQueryHandler::new(),
        }
    }

    pub fn new_with_redis(
        db: SqlConnect, redis: RedisConnectionManager,
    ) -> Self {
        Self {
            record: RecordPurchaseHandler::new_with_redis(db, redis.clone()),
            product_sales: ProductSalesQueryHandler::new_with_redis(redis),
        }
    }
}

pub struct PurchaseHandlers;

impl PurchaseHandlers {
    pub fn routes() -> Router<PurchaseServices> {
        Router::new()
            .route("/purchases", post(record_purchase))
            .route("/products", get(product_sales))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PurchaseParams {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/purchases",
    params(PurchaseParams),
    responses(
        (status = 201, description = "Purchase recorded and counted", body = PurchaseResponse),
        (status = 400, description = "Missing or invalid parameters", body = common_errors::ApiErrorResponse),
        (status = 401, description = "Missing or unknown API key", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "purchases"
)]
#[instrument(skip_all)]
pub async fn record_purchase(
    _auth: ApiKeyAuth, State(services): State<PurchaseServices>,
    query_result: Result<
        Query<PurchaseParams>,
        axum::extract::rejection::QueryRejection,
    >,
) -> Result<(StatusCode, Json<PurchaseResponse>), AppError> {
    let Query(params) = query_result.map_err(|rejection| {
        AppError::bad_request_with_details(
            "INVALID_QUERY_PARAMS",
            "Invalid query parameters provided",
            &rejection.to_string(),
        )
    })?;

    let (Some(user_id), Some(product_id)) = (
        params.user_id.filter(|u| !u.is_empty()),
        params.product_id.filter(|p| !p.is_empty()),
    )
    else {
        return Err(AppError::bad_request(
            "MISSING_PARAMS",
            "Missing user_id or product_id",
        ));
    };

    let result = services
        .record
        .execute(RecordPurchaseCommand {
            user_id,
            product_id,
            quantity: params.quantity,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Units sold per catalog product", body = ProductSalesResponse),
        (status = 401, description = "Missing or unknown API key", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "purchases"
)]
#[instrument(skip_all)]
pub async fn product_sales(
    _auth: ApiKeyAuth, State(services): State<PurchaseServices>,
) -> Result<Json<ProductSalesResponse>, AppError> {
    let sales = services.product_sales.execute().await?;
    Ok(Json(sales))
}
