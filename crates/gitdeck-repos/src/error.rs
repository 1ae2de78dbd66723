//! Error types for the gitdeck-repos crate

use thiserror::Error;

/// Catalog-specific errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No repository with the given name exists in the catalog
    #[error("unknown repository: {0}")]
    UnknownRepository(String),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
