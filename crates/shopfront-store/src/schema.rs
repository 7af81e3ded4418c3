//! SQLite schema definition for the store catalog
//!
//! Single table:
//! - stores: one row per catalog listing

use rusqlite::{Connection, Result};

/// Create the catalog table if it does not exist
///
/// Idempotent; runs at repository construction. The surrogate key is
/// auto-assigned, `name` carries the uniqueness constraint, and every
/// business column is NOT NULL.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            address TEXT NOT NULL,
            category TEXT NOT NULL,
            image_path TEXT NOT NULL,
            contact TEXT NOT NULL
        )
        "#,
        [],
    )?;

    // Index for the common filtered read
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stores_category ON stores(category)",
        [],
    )?;

    Ok(())
}
