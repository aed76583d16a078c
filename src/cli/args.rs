//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::utils::logging::LoggingConfig;

/// Logging options shared by both binaries
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true, env = "TOYUNDA_LOG_LEVEL")]
    pub log_level: String,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl LoggingArgs {
    /// Logging configuration these options describe
    pub fn to_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}

/// Arguments for the bootstrap command
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Directory receiving the libraries (overrides the configuration)
    #[arg(long)]
    pub libs_dir: Option<PathBuf>,
}

/// Arguments for the package command
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Build output directory (default: value of the configured environment variable)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Web tree to copy (overrides the configuration)
    #[arg(long)]
    pub web_dir: Option<PathBuf>,
}
