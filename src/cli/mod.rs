//! CLI module for the toyunda tools
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Create or update the `.yaml` sidecar of each video.
///
/// For every video the sidecar next to it gets `video_path` set to the video
/// file name and, when a duration is entered at the prompt, `video_duration`
/// in milliseconds. Other fields are kept.
#[derive(Parser, Debug)]
#[command(name = "video_to_yaml")]
#[command(about = "Create or update per-video YAML sidecar files")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub logging: args::LoggingArgs,

    /// Video files whose sidecars should be edited
    #[arg(value_name = "VIDEO_FILE")]
    pub files: Vec<PathBuf>,
}

/// Fetch and package the web assets of the player
#[derive(Parser, Debug)]
#[command(name = "web_assets")]
#[command(about = "Download web libraries and package the web tree")]
#[command(version)]
pub struct AssetsCli {
    #[command(flatten)]
    pub logging: args::LoggingArgs,

    /// Configuration file (default: ./toyunda_tools.toml if present)
    #[arg(long, global = true, env = "TOYUNDA_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: AssetsCommand,
}

/// Available asset commands
#[derive(Subcommand, Debug)]
pub enum AssetsCommand {
    /// Download the JavaScript and CSS libraries into the libs directory
    Bootstrap(args::BootstrapArgs),
    /// Copy the web tree and logo next to the build output
    Package(args::PackageArgs),
}
