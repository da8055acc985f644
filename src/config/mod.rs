#[cfg(feature = "cli")]
pub mod cli;
pub mod schema_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use schema_config::{ExposureConfig, ModelDefinition};
