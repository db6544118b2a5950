use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "Settings.toml";

const DEFAULT_URL: &str = "https://web.archive.org/web/20230902185326/https://en.wikipedia.org/wiki/List_of_countries_by_GDP_%28nominal%29";
const DEFAULT_CSV_PATH: &str = "Countries_by_GDP.csv";
const DEFAULT_DB_PATH: &str = "World_Economies.db";
const DEFAULT_TABLE_NAME: &str = "Countries_by_GDP";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub csv_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub table_name: String,
}

/// Loads `Settings.toml` from the working directory, overridden by `APP__*` variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

/// Same as [`load_config`] with an explicit settings file.
/// A missing file falls back to the built-in defaults.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let file = File::from(path.as_ref())
        .format(FileFormat::Toml)
        .required(false);

    let settings = Config::builder()
        .set_default("source.url", DEFAULT_URL)?
        .set_default("output.csv_path", DEFAULT_CSV_PATH)?
        .set_default("database.path", DEFAULT_DB_PATH)?
        .set_default("database.table_name", DEFAULT_TABLE_NAME)?
        .add_source(file)
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
