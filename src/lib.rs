//! Toyunda Tools Library
//!
//! Sidecar metadata editor for karaoke videos, plus the helpers that fetch
//! and package the player's web assets.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{AssetsInteractor, SidecarInteractor};
pub use domain::errors::SidecarError;
pub use domain::model::{BatchReport, DurationReply, FileOutcome, SidecarRecord};
pub use error::{ToolsError, ToolsResult};
pub use ports::{DurationProvider, Fetcher};
