//! Repository layer for the store catalog
//!
//! Owns the schema and exposes record-level CRUD plus filtered reads

pub mod sqlite_repo;

pub use sqlite_repo::{StoreRepository, DEFAULT_DB_PATH};
