//! Command line interface for Orrery

use clap::Parser;
use std::fmt;

use crate::config::{ConfigError, SimulationConfig};
use crate::physics::SpectralClass;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Configuration loaded but failed validation
    InvalidConfig(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Load(msg) => CliError::ConfigLoad(msg),
            ConfigError::Invalid(msg) => CliError::InvalidConfig(msg),
        }
    }
}

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Orrery - a star and its planets under Newtonian gravity
#[derive(Parser, Debug, Default)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Random seed for star system generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Viewport width planets are scattered across (overrides config file)
    #[arg(short = 'w', long, value_name = "PX")]
    pub width: Option<f64>,

    /// Spectral class of the star: M, K, G, F, A or B (overrides config file)
    #[arg(long, value_name = "CLASS")]
    pub star_class: Option<SpectralClass>,

    /// Stop after this many simulation ticks
    #[arg(short = 't', long, value_name = "COUNT")]
    pub ticks: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        if !std::path::Path::new(config_path).exists() {
            return Err(CliError::ConfigLoad(format!(
                "{config_path} does not exist"
            )));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.generation.initial_seed = Some(seed);
    }

    if let Some(width) = args.width {
        println!("Overriding viewport width to: {width}");
        config.generation.viewport_width = width;
    }

    if let Some(star_class) = args.star_class {
        println!("Using star class: {star_class}");
        config.generation.star_class = Some(star_class);
    }

    if args.paused {
        config.simulation.start_paused = true;
    }

    config.validate()?;

    Ok(config)
}
