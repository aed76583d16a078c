// TOML config adapter - Configuration for the web asset helpers

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ToolsError, ToolsResult};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "toyunda_tools.toml";

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub assets: AssetsConfig,
}

/// One library fetched by `bootstrap`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetDownload {
    pub url: String,
    /// File name inside the libs directory
    pub file: String,
}

/// Paths and sources used by the web asset helpers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub libs_dir: PathBuf,
    pub downloads: Vec<AssetDownload>,
    pub web_dir: PathBuf,
    pub logo: PathBuf,
    /// Environment variable naming the build output directory
    pub out_dir_env: String,
    /// Walked up from the output directory to reach the packaging root
    pub out_dir_ascend: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        let download = |url: &str, file: &str| AssetDownload {
            url: url.to_string(),
            file: file.to_string(),
        };

        Self {
            libs_dir: PathBuf::from("web/libs"),
            downloads: vec![
                download("https://rc.vuejs.org/js/vue.js", "vue.js"),
                download(
                    "https://cdn.jsdelivr.net/sweetalert2/4.2.6/sweetalert2.js",
                    "swal.js",
                ),
                download(
                    "https://cdn.jsdelivr.net/sweetalert2/4.2.6/sweetalert2.css",
                    "swal.css",
                ),
            ],
            web_dir: PathBuf::from("web"),
            logo: PathBuf::from("logo_toyunda.png"),
            out_dir_env: "OUT_DIR".to_string(),
            out_dir_ascend: PathBuf::from("../../../"),
        }
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load configuration following precedence: explicit file > default file > defaults.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> ToolsResult<ToolsConfig> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_file(default_path)
                } else {
                    debug!("No configuration file found, using defaults");
                    Ok(ToolsConfig::default())
                }
            }
        }
    }

    /// Load and parse one configuration file
    pub fn load_file(path: &Path) -> ToolsResult<ToolsConfig> {
        info!("Loading configuration from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ToolsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ToolsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration text; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<ToolsConfig, toml::de::Error> {
        toml::from_str(content)
    }
}
