//! CLI parse: clap types for menuplan. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// menuplan - weekly meal plans with dietary filters and batch cooking
#[derive(Parser)]
#[command(name = "menuplan")]
#[command(about = "Generate randomized weekly meal plans from a recipe catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/ and relative catalog paths resolve from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Recipe catalog file (overrides the configured or bundled catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a seven-day plan
    Generate {
        #[command(flatten)]
        diet: DietFlags,

        /// Preference label as collected by a signup form (repeatable), e.g. "sin lácteos"
        #[arg(long = "pref")]
        prefs: Vec<String>,

        /// Free-text persona description; "recién ..." implies strict low-FODMAP
        #[arg(long)]
        persona: Option<String>,

        /// Use the fully constrained demo preset
        #[arg(long)]
        demo: bool,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text, table or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Catalog operations
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

/// Dietary switches layered on top of the base options.
#[derive(Args, Debug, Default, Clone)]
pub struct DietFlags {
    /// Only low-FODMAP recipes
    #[arg(long)]
    pub strict_fodmap: bool,

    /// Only dairy-free recipes
    #[arg(long)]
    pub no_dairy: bool,

    /// Only gluten-free recipes
    #[arg(long)]
    pub no_gluten: bool,

    /// Only spicy-free recipes
    #[arg(long)]
    pub no_spicy: bool,

    /// Only vegetarian recipes (eggs allowed)
    #[arg(long)]
    pub vegetarian: bool,

    /// Prefer quick recipes
    #[arg(long)]
    pub quick_bias: bool,

    /// Disable batch-cooking linkage
    #[arg(long)]
    pub no_batch: bool,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List recipes
    List {
        /// Only recipes for this meal (breakfast, lunch, dinner)
        #[arg(long)]
        meal: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate the catalog and report batch-cooking coverage
    Validate,
}
