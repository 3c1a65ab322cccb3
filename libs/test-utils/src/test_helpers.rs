use anyhow::Result;
use sql_connection::SqlConnect;
use uuid::Uuid;

use crate::postgres::{TestDbConfig, TestPostgresContainer};

pub fn unique_user_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

pub fn unique_event_type() -> String {
    format!("event-{}", Uuid::new_v4().simple())
}

/// Insert a user with a generated id and return the id
pub async fn create_test_user(
    container: &TestPostgresContainer,
) -> Result<String> {
    let user_id = unique_user_id();
    let query = format!(
        "INSERT INTO users (user_id, registered_at) VALUES ('{}', \
         clock_timestamp())",
        user_id
    );
    container.execute_sql(&query).await?;
    Ok(user_id)
}

/// Insert an API key for an existing user and return the key
pub async fn create_test_api_key(
    container: &TestPostgresContainer, user_id: &str,
) -> Result<String> {
    let api_key = Uuid::new_v4().simple().to_string();
    let query = format!(
        "INSERT INTO api_keys (api_key, user_id) VALUES ('{}', '{}')",
        api_key, user_id
    );
    container.execute_sql(&query).await?;
    Ok(api_key)
}

/// Insert an event row directly, bypassing the handlers
pub async fn create_test_event(
    container: &TestPostgresContainer, user_id: &str, event_type: &str,
) -> Result<()> {
    let query = format!(
        "INSERT INTO events (user_id, event_type, occurred_at) VALUES \
         ('{}', '{}', clock_timestamp())",
        user_id, event_type
    );
    container.execute_sql(&query).await?;
    Ok(())
}

/// Create a SQL connection from a test container for use with DAOs and
/// handlers
pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    SqlConnect::new(container.pool.clone())
}

/// Point the process-global pool at the test database, for code paths that
/// resolve their connection via `SqlConnect::from_global` (request guards).
/// Safe to call from several tests; only the first call wins.
pub async fn init_global_sql_pool(
    container: &TestPostgresContainer,
) -> Result<()> {
    let config = TestDbConfig {
        connection_string: container.connection_string.clone(),
    };
    // Already-initialized is fine
    let _ = sql_connection::connect_postgres_db(&config).await;
    Ok(())
}
