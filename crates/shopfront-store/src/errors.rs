//! Error handling for shopfront-store
//!
//! Maps rusqlite failures onto the CatalogError taxonomy

use shopfront_core::errors::CatalogError;

pub use shopfront_core::errors::Result;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> CatalogError {
    CatalogError::Persistence {
        message: err.to_string(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> CatalogError {
    CatalogError::Persistence {
        message: format!("{}: {}", operation, err),
    }
}

/// Create a duplicate-name error for the given store name
pub fn duplicate_name(name: &str) -> CatalogError {
    CatalogError::DuplicateName {
        name: name.to_string(),
    }
}

/// Create a not-found error for the given store id
pub fn not_found(id: i64) -> CatalogError {
    CatalogError::NotFound { id }
}

/// True when the error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
