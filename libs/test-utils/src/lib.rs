pub mod postgres;
pub mod redis;
pub mod sql_migrator;
pub mod test_helpers;

pub use postgres::{TestDbConfig, TestPostgresContainer};
pub use redis::TestRedisContainer;
pub use sql_migrator::SqlMigrator;
pub use test_helpers::*;
