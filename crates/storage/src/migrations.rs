//! Database migrations

use crate::StorageError;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

/// Bring the database schema up to `SCHEMA_VERSION`. Idempotent; safe to run
/// on every open. Forward-only — there is no downgrade path.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version: i32 =
        conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: studies table");
        apply(
            conn,
            "v1",
            r#"
            CREATE TABLE IF NOT EXISTS studies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                geo_accession TEXT NOT NULL DEFAULT '',
                title TEXT NOT NULL DEFAULT '',
                organism TEXT NOT NULL DEFAULT '',
                data_type TEXT NOT NULL DEFAULT '',
                extracted_molecule TEXT NOT NULL DEFAULT '',
                superseries TEXT NOT NULL DEFAULT '',
                summary TEXT NOT NULL DEFAULT '',
                publication_date TEXT NOT NULL DEFAULT ''
            );

            CREATE INDEX IF NOT EXISTS idx_studies_organism ON studies(organism);
            CREATE INDEX IF NOT EXISTS idx_studies_data_type ON studies(data_type);
            "#,
        )?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}

/// Run one migration step, labeling any failure with the step name. A failed
/// step leaves `user_version` untouched so the ladder re-runs on next open.
fn apply(conn: &Connection, step: &str, sql: &str) -> Result<(), StorageError> {
    conn.execute_batch(sql)
        .map_err(|e| StorageError::Migration(format!("{step}: {e}")))
}
