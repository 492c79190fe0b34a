use std::path::Path;

use crate::{
    conf::ClientConfig,
    core::InsightError::{self, ConfigParsingError},
};
use config::{Config as CConfig, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, InsightError> {
        Self::build(
            CConfig::builder()
                .add_source(config::File::from_str(toml_str, config::FileFormat::Toml)),
        )
    }

    pub fn from_file(path: &Path) -> Result<Config, InsightError> {
        Self::build(
            CConfig::builder().add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            ),
        )
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Config, InsightError> {
        Self::build(CConfig::builder())
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, InsightError> {
        let config = builder
            .add_source(
                Environment::with_prefix("INSIGHT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}
