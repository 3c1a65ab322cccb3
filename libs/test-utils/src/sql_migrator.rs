use anyhow::Context;
use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;

/// Advisory lock key serializing migration runs against one database
const MIGRATION_LOCK_KEY: i64 = 0x70756c_7365;

/// SQL-based migration system using .sql files
///
/// Migrations live next to the domain that owns the tables, are embedded at
/// compile time, and are applied transactionally in order. Applied names are
/// tracked in `_migrations`.
pub struct SqlMigrator {
    pool: Pool,
}

const MIGRATIONS: [(&str, &str); 4] = [
    (
        "001_create_users",
        include_str!(
            "../../../domains/users/migrations/sql/001_create_users.sql"
        ),
    ),
    (
        "002_create_api_keys",
        include_str!(
            "../../../domains/users/migrations/sql/002_create_api_keys.sql"
        ),
    ),
    (
        "003_create_events",
        include_str!(
            "../../../domains/events/migrations/sql/003_create_events.sql"
        ),
    ),
    (
        "004_create_purchases",
        include_str!(
            "../../../domains/purchases/migrations/sql/\
             004_create_purchases.sql"
        ),
    ),
];

impl SqlMigrator {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    /// Run all pending migrations in order
    pub async fn run_all_migrations(&self) -> anyhow::Result<()> {
        let mut client = self.pool.get().await?;

        // Concurrent callers (parallel test setup) serialize here
        client
            .execute("SELECT pg_advisory_lock($1)", &[&MIGRATION_LOCK_KEY])
            .await?;

        let result = async {
            Self::create_migration_table(&client).await?;

            for (migration_name, migration_sql) in MIGRATIONS {
                if Self::is_migration_applied(&client, migration_name).await? {
                    continue;
                }

                tracing::info!("Running migration: {}", migration_name);

                let tx = client.transaction().await?;
                tx.batch_execute(migration_sql).await.with_context(|| {
                    format!("Failed to run migration {migration_name}")
                })?;
                tx.execute(
                    "INSERT INTO _migrations (name, applied_at) VALUES ($1, \
                     NOW())",
                    &[&migration_name],
                )
                .await?;
                tx.commit().await?;

                tracing::info!("Migration {} applied", migration_name);
            }

            Ok::<_, anyhow::Error>(())
        }
        .await;

        client
            .execute("SELECT pg_advisory_unlock($1)", &[&MIGRATION_LOCK_KEY])
            .await?;

        result
    }

    /// Names and timestamps of applied migrations, oldest first
    pub async fn applied_migrations(
        &self,
    ) -> anyhow::Result<Vec<(String, DateTime<Utc>)>> {
        let client = self.pool.get().await?;
        Self::create_migration_table(&client).await?;

        let rows = client
            .query(
                "SELECT name, applied_at FROM _migrations ORDER BY id",
                &[],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| (row.get(0), row.get(1)))
            .collect())
    }

    async fn create_migration_table(
        client: &deadpool_postgres::Object,
    ) -> anyhow::Result<()> {
        client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS _migrations (
                     id SERIAL PRIMARY KEY,
                     name VARCHAR(255) NOT NULL UNIQUE,
                     applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                 )",
            )
            .await?;
        Ok(())
    }

    async fn is_migration_applied(
        client: &deadpool_postgres::Object, migration_name: &str,
    ) -> anyhow::Result<bool> {
        let row = client
            .query_one(
                "SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = $1)",
                &[&migration_name],
            )
            .await?;
        Ok(row.get(0))
    }
}
