//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("defaults.batch", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}

/// Environment overrides, e.g. `MENUPLAN__DEFAULTS__NO_GLUTEN=true`.
/// Added last so it wins over every file source.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("MENUPLAN")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
