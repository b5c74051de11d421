//! Integration tests for Configuration System

use menuplan::cli::RunContext;
use menuplan::config::ConfigLoader;
use tempfile::TempDir;

const ONE_DAY_CATALOG: &str = r#"
[[recipe]]
name = "Desayuno único"
meal = "breakfast"

[[recipe]]
name = "Comida única"
meal = "lunch"

[[recipe]]
name = "Cena única"
meal = "dinner"
"#;

#[test]
fn test_config_selects_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("recipes.toml"), ONE_DAY_CATALOG).unwrap();
    let config_file = temp_dir.path().join("menuplan.toml");
    std::fs::write(
        &config_file,
        r#"
[catalog]
path = "recipes.toml"
"#,
    )
    .unwrap();

    let context = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file), None).unwrap();
    assert_eq!(context.catalog().len(), 3);
}

#[test]
fn test_catalog_override_wins_over_config() {
    let temp_dir = TempDir::new().unwrap();
    let override_path = temp_dir.path().join("override.toml");
    std::fs::write(&override_path, ONE_DAY_CATALOG).unwrap();

    let context = RunContext::new(temp_dir.path().to_path_buf(), None, Some(override_path)).unwrap();
    assert_eq!(context.catalog().len(), 3);
}

#[test]
fn test_bundled_catalog_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let context = RunContext::new(temp_dir.path().to_path_buf(), None, None).unwrap();
    assert_eq!(context.catalog().len(), 79);
}

#[test]
fn test_missing_catalog_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("menuplan.toml");
    std::fs::write(&config_file, "[catalog]\npath = \"nowhere.toml\"\n").unwrap();

    let err = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file), None)
        .err()
        .unwrap();
    assert!(err.to_string().contains("catalog file not found"));
}

#[test]
fn test_env_specific_workspace_file_layers_on_base() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[defaults]\nno_dairy = true\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();
    // MENUPLAN_ENV is unset in tests, so the "development" layer applies.
    std::fs::write(
        config_dir.join("development.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert!(config.defaults.no_dairy);
    assert_eq!(config.logging.level, "debug");
}
