//! SQLite repository for catalog CRUD operations

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};
use shopfront_core::{Result, Store};

use crate::db;
use crate::errors::{duplicate_name, from_rusqlite, io_error, is_unique_violation, not_found};
use crate::query::{FilterColumn, SortOrder, UpdateField};
use crate::schema::create_tables;

/// Database file used by the surrounding application when no path is given
pub const DEFAULT_DB_PATH: &str = "stores.db";

/// Repository for catalog listings
///
/// Holds only the database path: every operation opens its own connection,
/// executes, and releases it when the operation returns, on success and
/// error paths alike. No connection state is shared between operations.
pub struct StoreRepository {
    db_path: PathBuf,
}

impl StoreRepository {
    /// Open a repository, initializing the database if needed
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }

        let repo = Self { db_path };
        let conn = repo.connect()?;
        create_tables(&conn).map_err(from_rusqlite)?;

        tracing::debug!(path = %repo.db_path.display(), "Opened catalog database");
        Ok(repo)
    }

    /// Open the repository at the application's fixed database location
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DB_PATH)
    }

    /// Open and configure a connection for a single operation
    fn connect(&self) -> Result<Connection> {
        let conn = db::open(&self.db_path)?;
        db::configure(&conn)?;
        Ok(conn)
    }

    // ==================== Mutations ====================

    /// Insert a new store record
    ///
    /// The surrogate key is assigned by storage and not returned; use
    /// [`StoreRepository::id_by_name`] to resolve it.
    ///
    /// # Errors
    /// * `DuplicateName` - A store with the same name already exists
    /// * `Persistence` - Database error
    pub fn save(&self, store: &Store) -> Result<()> {
        let conn = self.connect()?;
        let result = conn.execute(
            "INSERT INTO stores (name, address, category, image_path, contact)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                store.name,
                store.address,
                store.category,
                store.image_path,
                store.contact,
            ],
        );

        match result {
            Ok(_) => {
                tracing::debug!(name = %store.name, "Saved store");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(duplicate_name(&store.name)),
            Err(err) => Err(from_rusqlite(err)),
        }
    }

    /// Update exactly one field of the record matching `id`
    ///
    /// # Errors
    /// * `NotFound` - No record matches `id`
    /// * `DuplicateName` - Updating `Name` collides with an existing store
    /// * `Persistence` - Database error
    pub fn update(&self, id: i64, field: UpdateField, value: &str) -> Result<()> {
        let conn = self.connect()?;
        // field.column() is a fixed fragment from the allow-list; the value
        // and id are bound
        let sql = format!("UPDATE stores SET {} = ?1 WHERE id = ?2", field.column());

        let affected = match conn.execute(&sql, params![value, id]) {
            Ok(n) => n,
            Err(err) if is_unique_violation(&err) => return Err(duplicate_name(value)),
            Err(err) => return Err(from_rusqlite(err)),
        };

        if affected == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, column = field.column(), "Updated store field");
        Ok(())
    }

    /// Delete the record matching `id`
    ///
    /// A missing id is a successful no-op.
    ///
    /// # Errors
    /// * `Persistence` - Database error
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let affected = conn
            .execute("DELETE FROM stores WHERE id = ?1", params![id])
            .map_err(from_rusqlite)?;

        tracing::debug!(id, affected, "Deleted store");
        Ok(())
    }

    // ==================== Reads ====================

    /// Get the store matching `id`
    ///
    /// # Errors
    /// * `NotFound` - No record matches `id`
    /// * `Persistence` - Database error
    pub fn fetch(&self, id: i64) -> Result<Store> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT name, address, category, image_path, contact
             FROM stores WHERE id = ?1",
            params![id],
            store_from_row,
        )
        .optional()
        .map_err(from_rusqlite)?
        .ok_or_else(|| not_found(id))
    }

    /// List every store, ascending id
    pub fn list_all(&self) -> Result<Vec<Store>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT name, address, category, image_path, contact
                 FROM stores ORDER BY id",
            )
            .map_err(from_rusqlite)?;

        let stores = stmt
            .query_map([], store_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(stores)
    }

    /// List up to `limit` stores whose `column` contains `needle`
    ///
    /// With no column given, the match spans name, address, category and
    /// contact. The needle is bound as a parameter inside a `%...%` pattern;
    /// LIKE wildcards inside it keep their meaning.
    pub fn list_filtered(
        &self,
        limit: u32,
        needle: &str,
        order: SortOrder,
        column: Option<FilterColumn>,
    ) -> Result<Vec<Store>> {
        let conn = self.connect()?;

        // Both dynamic fragments come from closed enumerations
        let where_clause = match column {
            Some(col) => format!("{} LIKE ?1", col.column()),
            None => {
                "name LIKE ?1 OR address LIKE ?1 OR category LIKE ?1 OR contact LIKE ?1"
                    .to_string()
            }
        };
        let sql = format!(
            "SELECT name, address, category, image_path, contact
             FROM stores WHERE {} ORDER BY {} LIMIT ?2",
            where_clause,
            order.order_by(),
        );
        let pattern = format!("%{}%", needle);

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let stores = stmt
            .query_map(params![pattern, limit], store_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(stores)
    }

    /// Take up to `n` stores in random order
    ///
    /// Returns fewer than `n` when the table holds fewer records, each
    /// record at most once.
    pub fn list_random_sample(&self, n: u32) -> Result<Vec<Store>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT name, address, category, image_path, contact
                 FROM stores ORDER BY RANDOM() LIMIT ?1",
            )
            .map_err(from_rusqlite)?;

        let stores = stmt
            .query_map(params![n], store_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(stores)
    }

    /// Resolve the surrogate key for a store name
    pub fn id_by_name(&self, name: &str) -> Result<Option<i64>> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id FROM stores WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Total number of stores
    pub fn count(&self) -> Result<u64> {
        let conn = self.connect()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM stores", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count as u64)
    }
}

/// Map the business columns of a stores row onto a Store value
///
/// The surrogate key is never selected; Store is an id-less value object.
fn store_from_row(row: &Row<'_>) -> rusqlite::Result<Store> {
    Ok(Store {
        name: row.get(0)?,
        address: row.get(1)?,
        category: row.get(2)?,
        image_path: row.get(3)?,
        contact: row.get(4)?,
    })
}
