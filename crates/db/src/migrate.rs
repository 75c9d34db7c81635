use std::collections::HashSet;

use sqlx::SqlitePool;
use tracing::info;

const MIGRATIONS: &[(&str, &str)] = &[(
    "001_catalog_schema",
    include_str!("../migrations/001_catalog_schema.sql"),
)];

/// Run forward-only migrations. Applied migrations are tracked by name in a
/// `_migrations` table, so re-running is a no-op.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_ts INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    let applied: HashSet<String> = sqlx::query_as("SELECT name FROM _migrations")
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(name,): (String,)| name)
        .collect();

    for (name, sql) in MIGRATIONS {
        if applied.contains(*name) {
            continue;
        }

        info!(migration = name, "applying migration");
        // Statements are separated by semicolons; sqlite runs them one at a time
        for statement in sql.split(';') {
            let trimmed = statement.trim();
            if trimmed.is_empty() {
                continue;
            }
            sqlx::query(trimmed).execute(pool).await?;
        }

        sqlx::query("INSERT INTO _migrations (name, applied_ts) VALUES (?, ?)")
            .bind(name)
            .bind(chrono::Utc::now().timestamp())
            .execute(pool)
            .await?;

        info!(migration = name, "migration applied");
    }

    Ok(())
}
