pub mod settings;

pub use settings::{load_config, load_config_from, AppConfig, DatabaseConfig, OutputConfig, SourceConfig};
