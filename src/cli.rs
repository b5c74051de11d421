//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{catalog_command_name, command_name};
pub use output::map_error;
pub use parse::{CatalogCommands, Cli, Commands, DietFlags};
pub use presentation::{
    batch_coverage, format_catalog_list_json, format_catalog_list_text, format_catalog_validate,
    BaseCoverage,
};
pub use route::{resolve_options, RunContext};
