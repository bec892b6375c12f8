use thiserror::Error;

/// Main error type for the related-games engine
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Target id not present in the catalog
    #[error("Game not found: {0}")]
    GameNotFound(String),

    /// Two catalog records share an id
    #[error("Duplicate game id in catalog: {0}")]
    DuplicateGameId(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors while loading a catalog
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog source errors
    #[error("Catalog source '{source_name}' error: {message}")]
    Source { source_name: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for CatalogError {
    fn from(s: String) -> Self {
        CatalogError::Other(s)
    }
}

impl From<&str> for CatalogError {
    fn from(s: &str) -> Self {
        CatalogError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
