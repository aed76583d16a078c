//! web_assets
//!
//! Downloads the player's JavaScript libraries and copies the web tree next
//! to the build output.
//!
//! ```bash
//! web_assets bootstrap
//! OUT_DIR=target/debug/build/toyunda-xxxx/out web_assets package
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use toyunda_tools::cli::{commands, AssetsCli};
use toyunda_tools::utils::logging::init_logging;

fn main() -> Result<()> {
    let cli = AssetsCli::parse();
    init_logging(&cli.logging.to_config());

    info!("Executing {:?}", cli.command);
    commands::run_assets(cli)
}
