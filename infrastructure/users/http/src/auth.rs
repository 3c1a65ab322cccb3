use common_errors::AppError;
use database_traits::connection::{FromRequestParts, Parts, header};
use sql_connection::SqlConnect;
use users_dao::ApiKeyDao;

/// Request guard for endpoints that require a registered API key.
///
/// The raw `Authorization` header value is matched against the `api_keys`
/// table; handlers that take this extractor reject with 401 before running.
pub struct ApiKeyAuth {
    pub api_key: String,
}

impl<S> FromRequestParts<S> for ApiKeyAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts, _state: &S,
    ) -> impl std::future::Future<
        Output = Result<Self, <Self as FromRequestParts<S>>::Rejection>,
    > + Send {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let Some(api_key) = header_value.filter(|key| !key.is_empty())
            else {
                return Err(AppError::unauthorized(
                    "MISSING_API_KEY",
                    "Authorization header with an API key is required",
                ));
            };

            let dao = ApiKeyDao::new(SqlConnect::from_global());
            if !dao.exists(&api_key).await? {
                return Err(AppError::unauthorized(
                    "UNKNOWN_API_KEY",
                    "API key is not recognized",
                ));
            }

            Ok(ApiKeyAuth { api_key })
        })
    }
}
