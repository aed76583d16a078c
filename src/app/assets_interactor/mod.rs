// Assets interactor - Fetches the web libraries and packages the web tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::adapters::toml_config::AssetsConfig;
use crate::error::{ToolsError, ToolsResult};
use crate::ports::Fetcher;

/// Result of one best-effort download
#[derive(Debug)]
pub struct DownloadOutcome {
    pub url: String,
    pub target: PathBuf,
    /// Bytes written, or why nothing was written
    pub result: ToolsResult<usize>,
}

impl DownloadOutcome {
    /// Whether the asset landed on disk
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of a packaging run
#[derive(Debug, Clone, PartialEq)]
pub struct PackageReport {
    /// Directory the web tree was copied into
    pub web_destination: PathBuf,
    /// Number of regular files copied from the web tree
    pub files_copied: usize,
    /// Where the logo was copied
    pub logo_destination: PathBuf,
}

/// Interactor for the web asset bootstrap and packaging steps.
///
/// Packaging needs no fetcher; build it with `()` in that case.
pub struct AssetsInteractor<F> {
    config: AssetsConfig,
    fetcher: F,
}

impl<F: Fetcher> AssetsInteractor<F> {
    /// Download every configured library into the libs directory.
    ///
    /// Only a failure to create the libs directory is fatal. A failed download
    /// is recorded in its outcome and leaves no file behind.
    pub fn bootstrap(&self) -> ToolsResult<Vec<DownloadOutcome>> {
        fs::create_dir_all(&self.config.libs_dir)?;

        let outcomes = self
            .config
            .downloads
            .iter()
            .map(|download| {
                let target = self.config.libs_dir.join(&download.file);
                let result = self
                    .fetcher
                    .fetch(&download.url)
                    .and_then(|body| {
                        fs::write(&target, &body)?;
                        Ok(body.len())
                    });

                match &result {
                    Ok(bytes) => info!(url = %download.url, bytes, "Downloaded asset"),
                    Err(e) => warn!(url = %download.url, "{}", e),
                }

                DownloadOutcome {
                    url: download.url.clone(),
                    target,
                    result,
                }
            })
            .collect();

        Ok(outcomes)
    }
}

impl<F> AssetsInteractor<F> {
    /// Create new assets interactor with injected fetcher
    pub fn new(config: AssetsConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Active configuration
    pub fn config(&self) -> &AssetsConfig {
        &self.config
    }

    /// Package using the output directory named by the configured environment variable
    pub fn package_from_env(&self) -> ToolsResult<PackageReport> {
        let name = &self.config.out_dir_env;
        let out_dir = std::env::var_os(name).ok_or_else(|| ToolsError::MissingEnv {
            name: name.clone(),
        })?;
        self.package(Path::new(&out_dir))
    }

    /// Replace `<out_dir>/<ascend>/web` with a copy of the web tree and copy the logo next to it
    pub fn package(&self, out_dir: &Path) -> ToolsResult<PackageReport> {
        let destination = out_dir.join(&self.config.out_dir_ascend);
        let web_destination = destination.join("web");

        if web_destination.exists() {
            debug!(path = %web_destination.display(), "Removing previous web tree");
            fs::remove_dir_all(&web_destination)?;
        }

        let files_copied = copy_tree(&self.config.web_dir, &web_destination)?;
        info!(
            from = %self.config.web_dir.display(),
            to = %web_destination.display(),
            files_copied,
            "Copied web tree"
        );

        let logo_name = self.config.logo.file_name().ok_or_else(|| {
            ToolsError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("logo path '{}' has no file name", self.config.logo.display()),
            ))
        })?;
        let logo_destination = destination.join(logo_name);
        fs::copy(&self.config.logo, &logo_destination).map_err(|source| ToolsError::Copy {
            from: self.config.logo.clone(),
            to: logo_destination.clone(),
            source,
        })?;

        Ok(PackageReport {
            web_destination,
            files_copied,
            logo_destination,
        })
    }
}

/// Recursively copy `from` into `to`, returning the number of files copied.
///
/// Symlinks are followed and their targets copied.
fn copy_tree(from: &Path, to: &Path) -> ToolsResult<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = to.join(relative);

        let result = if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
        } else {
            copied += 1;
            fs::copy(entry.path(), &target).map(|_| ())
        };

        result.map_err(|source| ToolsError::Copy {
            from: entry.path().to_path_buf(),
            to: target,
            source,
        })?;
    }

    Ok(copied)
}
