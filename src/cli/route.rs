//! CLI route: single route table and run context. Dispatches to the generator,
//! renderers and presentation.

use crate::catalog::{Catalog, Recipe};
use crate::cli::parse::{CatalogCommands, Commands, DietFlags};
use crate::cli::presentation::{
    format_catalog_list_json, format_catalog_list_text, format_catalog_validate,
};
use crate::cli::command_name;
use crate::config::{ConfigLoader, MenuConfig};
use crate::error::ApiError;
use crate::generation::Generator;
use crate::options::PlanOptions;
use crate::render::{renderer, OutputFormat};
use crate::types::MealSlot;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the shared catalog.
pub struct RunContext {
    config: MenuConfig,
    generator: Generator,
}

impl RunContext {
    /// Create run context from workspace root, optional config path and optional
    /// catalog override. Catalog precedence: override, configured path, bundled.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate(&workspace_root).map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let catalog = match catalog_path.or_else(|| config.catalog.resolve_path(&workspace_root)) {
            Some(path) => Catalog::load(&path)?,
            None => Catalog::builtin()?,
        };
        debug!(recipes = catalog.len(), "Catalog ready");

        Ok(Self {
            config,
            generator: Generator::new(Arc::new(catalog)),
        })
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        self.generator.catalog()
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        let result = self.execute_inner(command);
        info!(
            command = %name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                diet,
                prefs,
                persona,
                demo,
                seed,
                format,
            } => {
                let format: OutputFormat = format.parse()?;
                let options = resolve_options(
                    &self.config.defaults,
                    diet,
                    prefs,
                    persona.as_deref(),
                    *demo,
                );
                let generated = match seed {
                    Some(seed) => self
                        .generator
                        .generate_with_rng(&options, &mut ChaCha8Rng::seed_from_u64(*seed)),
                    None => self.generator.generate(&options),
                };
                let color = std::io::stdout().is_terminal();
                renderer(format, color).render(&generated)
            }
            Commands::Catalog { command } => self.handle_catalog_command(command),
        }
    }

    fn handle_catalog_command(&self, command: &CatalogCommands) -> Result<String, ApiError> {
        match command {
            CatalogCommands::List { meal, format } => {
                let meal = meal
                    .as_deref()
                    .map(str::parse::<MealSlot>)
                    .transpose()
                    .map_err(ApiError::InvalidOption)?;
                let recipes: Vec<&Recipe> = self
                    .catalog()
                    .recipes()
                    .iter()
                    .filter(|r| meal.map_or(true, |m| r.meal == m))
                    .collect();
                if format == "json" {
                    format_catalog_list_json(&recipes)
                } else {
                    Ok(format_catalog_list_text(&recipes))
                }
            }
            CatalogCommands::Validate => Ok(format_catalog_validate(self.catalog())),
        }
    }
}

/// Resolve plan options for `generate`.
///
/// The base is the demo preset, else the preference mapping when any label or
/// persona was given, else the configured defaults. Dietary flags then add
/// constraints on top; `--no-batch` always disables linkage.
pub fn resolve_options(
    defaults: &PlanOptions,
    diet: &DietFlags,
    prefs: &[String],
    persona: Option<&str>,
    demo: bool,
) -> PlanOptions {
    let mut options = if demo {
        PlanOptions::demo()
    } else if !prefs.is_empty() || persona.is_some() {
        PlanOptions::from_preferences(prefs, persona)
    } else {
        *defaults
    };

    options.strict_fodmap |= diet.strict_fodmap;
    options.no_dairy |= diet.no_dairy;
    options.no_gluten |= diet.no_gluten;
    options.no_spicy |= diet.no_spicy;
    options.vegetarian |= diet.vegetarian;
    options.quick_bias |= diet.quick_bias;
    if diet.no_batch {
        options.batch = false;
    }
    options
}
