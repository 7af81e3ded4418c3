use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error taxonomy for catalog operations
///
/// Each variant maps to a stable error code via [`CatalogError::code`] for
/// programmatic handling by collaborator layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A store with the same name already exists (unique constraint)
    #[error("Store name already exists: {name}")]
    DuplicateName { name: String },

    /// No store matches the given id
    #[error("Store not found: {id}")]
    NotFound { id: i64 },

    /// Caller-supplied field name is outside the allowed set
    #[error("Invalid field: {field}")]
    InvalidField { field: String },

    /// Caller-supplied sort order is outside the allowed set
    #[error("Invalid sort order: {order}")]
    InvalidOrder { order: String },

    /// Underlying storage failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl CatalogError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateName { .. } => "ERR_DUPLICATE_NAME",
            CatalogError::NotFound { .. } => "ERR_NOT_FOUND",
            CatalogError::InvalidField { .. } => "ERR_INVALID_FIELD",
            CatalogError::InvalidOrder { .. } => "ERR_INVALID_ORDER",
            CatalogError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }
}
