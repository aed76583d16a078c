//! video_to_yaml
//!
//! Creates or updates the `.yaml` sidecar of each video given on the command
//! line, asking for the video duration interactively.
//!
//! # Usage
//!
//! ```bash
//! video_to_yaml opening.mp4 ending.avi
//! ```
//!
//! At each prompt, type the duration in seconds (`93.5`), press Ctrl-D to
//! keep the stored duration, or Ctrl-C to stop the whole run.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use toyunda_tools::cli::{commands, Cli};
use toyunda_tools::utils::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging.to_config());

    info!("Starting video_to_yaml with {} file(s)", cli.files.len());
    let report = commands::edit_sidecars(cli)?;

    if report.cancelled {
        info!("Interrupted, remaining files were not processed");
    }
    Ok(())
}
