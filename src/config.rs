use crate::physics::SpectralClass;
use crate::physics::math::Scalar;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "ORRERY";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug)]
pub enum ConfigError {
    /// Sources could not be read or deserialized
    Load(String),
    /// Values were read but are unusable
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Failed to load configuration: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub generation: GenerationConfig,
    pub simulation: RuntimeConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the shared random source; `None` seeds from the OS
    pub initial_seed: Option<u64>,
    /// Width of the view planets are scattered across, in display units
    pub viewport_width: Scalar,
    pub min_planets: usize,
    pub max_planets: usize,
    /// Forces the star's spectral class instead of drawing it
    pub star_class: Option<SpectralClass>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            initial_seed: None,
            viewport_width: 1920.0,
            min_planets: 1,
            max_planets: 13,
            star_class: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub ticks_per_second: f64,
    pub start_paused: bool,
    pub orbit_trails: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            start_paused: false,
            orbit_trails: false,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orrery").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration layered with `ORRERY__*` environment
    /// overrides, falling back to defaults on any error
    pub fn load_from_user_config() -> Self {
        let path = Self::user_config_path();

        match Self::load_layered(path.as_deref()) {
            Ok(config) => config.validated_or_default(),
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Returns `self` if it passes [`Self::validate`], defaults otherwise
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Builds a configuration from an optional TOML file and the environment,
    /// with environment variables taking precedence
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;

        if generation.min_planets == 0 {
            return Err(ConfigError::Invalid(
                "min_planets must be at least 1".to_string(),
            ));
        }
        if generation.min_planets > generation.max_planets {
            return Err(ConfigError::Invalid(format!(
                "min_planets ({}) exceeds max_planets ({})",
                generation.min_planets, generation.max_planets
            )));
        }
        if !(generation.viewport_width.is_finite() && generation.viewport_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport_width must be positive, got {}",
                generation.viewport_width
            )));
        }
        let rate = self.simulation.ticks_per_second;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ticks_per_second must be positive, got {rate}"
            )));
        }

        Ok(())
    }
}
