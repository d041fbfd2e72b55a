use serde::Deserialize;
use std::path::Path;

use steven_block::StateValue;

#[derive(Debug, Default, Deserialize)]
pub struct InspectConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub catalogue: CatalogueSection,
    #[serde(default)]
    pub output: OutputSection,
    /// Extra block families, registered after the catalogue in file order.
    #[serde(default)]
    pub blocks: Vec<BlockSection>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogueSection {
    #[serde(default = "default_true")]
    pub vanilla: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogueSection {
    fn default() -> Self {
        Self { vanilla: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    /// Also print the families' variants that have no combined id.
    #[serde(default)]
    pub include_unplaced: bool,
}

#[derive(Debug, Deserialize)]
pub struct BlockSection {
    /// `plugin:name`, or a bare name in the `minecraft` namespace.
    pub id: String,
    #[serde(default = "default_true")]
    pub cull_against: bool,
    /// Overrides whether every variant is placed by data offset. Defaults to
    /// true when any states are declared.
    #[serde(default)]
    pub data: Option<bool>,
    #[serde(default)]
    pub states: Vec<StateSection>,
}

#[derive(Debug, Deserialize)]
pub struct StateSection {
    pub key: String,
    pub values: Vec<StateValue>,
}

impl InspectConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
