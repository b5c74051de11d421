//! Configuration System
//!
//! Hierarchical configuration: built-in defaults, a user-level file, workspace
//! files and `MENUPLAN__*` environment overrides. Holds the default plan options,
//! the catalog source and logging settings.

use crate::logging::LoggingConfig;
use crate::options::PlanOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Plan options applied when the caller sets none
    #[serde(default)]
    pub defaults: PlanOptions,

    /// Recipe catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where recipes come from. The bundled catalog is used when `path` is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Catalog file path, with relative paths taken from the workspace root.
    pub fn resolve_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                workspace_root.join(p)
            }
        })
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Catalog(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Catalog(msg) => write!(f, "Catalog: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MenuConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self, workspace_root: &Path) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(path) = self.catalog.resolve_path(workspace_root) {
            if !path.is_file() {
                errors.push(ValidationError::Catalog(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "invalid format '{}'",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "invalid output '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
