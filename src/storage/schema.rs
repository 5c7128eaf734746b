//! Database schema definitions.

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// The complete SQL schema for the SBOM database.
pub const SCHEMA_SQL: &str = r"
    -- One row per ingested SBOM file; raw_json keeps the source text for audit.
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        raw_json TEXT
    );

    -- Declared components. name/version/license may all be NULL.
    -- No uniqueness on (name, version): the same package may appear many times.
    CREATE TABLE IF NOT EXISTS packages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document_id INTEGER,
        name TEXT,
        version TEXT,
        license TEXT,
        FOREIGN KEY (document_id) REFERENCES documents(id)
    );

    -- Query paths
    CREATE INDEX IF NOT EXISTS idx_packages_name_version ON packages(name, version);
    CREATE INDEX IF NOT EXISTS idx_packages_license ON packages(license);
    CREATE INDEX IF NOT EXISTS idx_packages_document ON packages(document_id);
";

/// Apply the schema to the database.
///
/// Idempotent: every statement uses `IF NOT EXISTS`, so existing tables and
/// rows are left untouched.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Enforce packages.document_id -> documents.id
    conn.pragma_update(None, "foreign_keys", "ON")?;

    conn.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)?;

    Ok(())
}
