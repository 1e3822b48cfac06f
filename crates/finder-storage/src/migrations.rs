//! Database schema migrations.

use rusqlite::Connection;
use tracing::info;

use finder_core::error::FinderError;

/// Run all pending database migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), FinderError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| FinderError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| FinderError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: user_attributes");
    }

    Ok(())
}

/// Version 1: one attribute snapshot per user.
fn apply_v1(conn: &Connection) -> Result<(), FinderError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS user_attributes (
            user_id     TEXT PRIMARY KEY NOT NULL,
            attributes  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        INSERT INTO schema_migrations (version, name) VALUES (1, 'user_attributes');
        ",
    )
    .map_err(|e| FinderError::Storage(format!("Migration v1 failed: {}", e)))
}
