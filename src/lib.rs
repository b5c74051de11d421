//! menuplan: Weekly Meal Plan Generation
//!
//! Builds randomized seven-day meal plans from a read-only recipe catalog,
//! filtered by dietary constraints, with batch-cooking linkage and
//! family-variant hints. Generation is a pure function of the catalog, the
//! options and a random source; rendering and serialization consume its output.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod generation;
pub mod logging;
pub mod options;
pub mod render;
pub mod report;
pub mod types;

pub use catalog::{Catalog, Recipe};
pub use generation::{GeneratedPlan, Generator};
pub use options::PlanOptions;
