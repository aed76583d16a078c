//! Command implementations

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::toml_config::AssetsConfig;
use crate::adapters::{ConsoleDurationProvider, HttpFetcher, TomlConfigAdapter};
use crate::app::{AssetsInteractor, SidecarInteractor};
use crate::cli::args::{BootstrapArgs, PackageArgs};
use crate::cli::{AssetsCli, AssetsCommand, Cli};
use crate::domain::model::BatchReport;

/// Execute the sidecar editor over every file given on the command line
pub fn edit_sidecars(cli: Cli) -> Result<BatchReport> {
    if cli.files.is_empty() {
        info!("No video files given, nothing to do");
        return Ok(BatchReport::default());
    }

    let provider =
        ConsoleDurationProvider::new().context("Failed to set up the duration prompt")?;
    let mut interactor = SidecarInteractor::new(provider, io::stdout());
    let report = interactor.run_batch(&cli.files);

    info!(
        updated = report.updated_count(),
        failed = report.failed_count(),
        cancelled = report.cancelled,
        "Sidecar batch finished"
    );
    Ok(report)
}

/// Execute one web asset command
pub fn run_assets(cli: AssetsCli) -> Result<()> {
    let config = TomlConfigAdapter::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        AssetsCommand::Bootstrap(args) => bootstrap(config.assets, args),
        AssetsCommand::Package(args) => package(config.assets, args),
    }
}

/// Execute the bootstrap command
fn bootstrap(mut config: AssetsConfig, args: BootstrapArgs) -> Result<()> {
    if let Some(libs_dir) = args.libs_dir {
        config.libs_dir = libs_dir;
    }

    let fetcher = HttpFetcher::new()?;
    let interactor = AssetsInteractor::new(config, fetcher);
    let outcomes = interactor.bootstrap().with_context(|| {
        format!(
            "Failed to create libs directory '{}'",
            interactor.config().libs_dir.display()
        )
    })?;

    for outcome in &outcomes {
        if outcome.is_success() {
            println!("downloaded '{}'", outcome.url);
        } else {
            println!("failed to download '{}'", outcome.url);
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    if failed > 0 {
        warn!("{} of {} downloads failed", failed, outcomes.len());
    }
    Ok(())
}

/// Execute the package command
fn package(mut config: AssetsConfig, args: PackageArgs) -> Result<()> {
    if let Some(web_dir) = args.web_dir {
        config.web_dir = web_dir;
    }

    let interactor = AssetsInteractor::new(config, ());
    let report = match args.out_dir {
        Some(out_dir) => interactor.package(&out_dir),
        None => interactor.package_from_env(),
    }
    .context("Failed to package web assets")?;

    println!(
        "copied {} files to '{}'",
        report.files_copied,
        report.web_destination.display()
    );
    println!("copied logo to '{}'", report.logo_destination.display());
    Ok(())
}
