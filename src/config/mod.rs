pub mod toml_config;

pub use toml_config::{CallTreeConfig, FixtureConfig, ProcessorConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Args;

// Flags shared by both fixture binaries, flattened into each binary's parser.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct CliConfig {
    /// Path to a TOML file with program inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dispatcher inputs, replacing the configured ones
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<i32>,

    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn load(&self) -> Result<FixtureConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                FixtureConfig::from_file(path)?
            }
            None => FixtureConfig::default(),
        };
        config.override_values(&self.values);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
