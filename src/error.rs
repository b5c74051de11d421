//! Error types for the menu planner.
//!
//! Plan generation itself never fails; errors only arise at the edges
//! (catalog construction, configuration, logging setup and output encoding).

use thiserror::Error;

/// Catalog construction and loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate recipe name: {0}")]
    DuplicateName(String),

    #[error("Recipe '{recipe}' references unknown batch base '{base}'")]
    UnresolvedBase { recipe: String, base: String },

    #[error("Recipe '{recipe}' references '{base}', which is not a batch base")]
    NotABase { recipe: String, base: String },

    #[error("Recipe '{0}' is marked as a batch use but names no base")]
    MissingBase(String),

    #[error("Catalog parse error: {0}")]
    Parse(String),

    #[error("Catalog I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced to callers of the library and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::OutputError(err.to_string())
    }
}
