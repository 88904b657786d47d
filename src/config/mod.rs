// Configuration module entry point
// Layered loading: built-in defaults, optional TOML file, then environment

mod types;

pub use types::{Config, LoggingConfig, NegotiationConfig};

use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

/// Environment variable prefix, e.g. `STATIC_RDF__LOGGING__LEVEL=debug`
const ENV_PREFIX: &str = "STATIC_RDF";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults apply
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("negotiation.supported_content_types")
                    .with_list_parse_key("negotiation.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from an in-memory TOML document over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    let defaults = Config::default();
    builder
        .set_default(
            "negotiation.supported_content_types",
            defaults.negotiation.supported_content_types,
        )?
        .set_default(
            "negotiation.supported_languages",
            defaults.negotiation.supported_languages,
        )?
        .set_default("logging.level", defaults.logging.level)?
        .set_default("logging.format", defaults.logging.format)
}
