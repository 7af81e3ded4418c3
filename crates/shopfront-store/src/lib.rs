//! Shopfront Store - SQLite persistence for the store catalog
//!
//! Provides:
//! - Connection management with per-operation lifetimes
//! - Idempotent schema creation
//! - Allow-listed dynamic query fragments
//! - The record-level repository

pub mod db;
pub mod errors;
pub mod query;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use query::{FilterColumn, SortOrder, UpdateField};
pub use repo::StoreRepository;
