use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetApiKeyQuery {
    pub user_id: String,
}
