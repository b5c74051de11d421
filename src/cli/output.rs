//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, CatalogError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Catalog(CatalogError::IoError(io)) => {
            format!("Could not read catalog file: {}", io)
        }
        _ => e.to_string(),
    }
}
