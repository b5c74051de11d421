//! Catalog file source: TOML documents made of `[[recipe]]` tables.

use super::{Catalog, CatalogBuilder, RecipeSpec};
use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "recipe")]
    recipes: Vec<RecipeSpec>,
}

pub(super) fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let source = std::fs::read_to_string(path)?;
    let catalog = parse(&source)?;
    info!(
        path = %path.display(),
        recipes = catalog.len(),
        "Loaded catalog file"
    );
    Ok(catalog)
}

pub(super) fn parse(source: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile =
        toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
    let mut builder = CatalogBuilder::new();
    builder.extend(file.recipes);
    builder.build()
}
