//! CLI command-name contract for logging and routing.

use crate::cli::parse::{CatalogCommands, Commands};

/// Command name string for log events (e.g. "generate", "catalog.list").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Generate { .. } => "generate".to_string(),
        Commands::Catalog { command } => format!("catalog.{}", catalog_command_name(command)),
    }
}

pub fn catalog_command_name(command: &CatalogCommands) -> &'static str {
    match command {
        CatalogCommands::List { .. } => "list",
        CatalogCommands::Validate => "validate",
    }
}
