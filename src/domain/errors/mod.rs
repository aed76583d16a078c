// Domain errors - Per-file failures of the sidecar editor

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::model::RecordParseError;
use crate::utils::time::ConversionError;

/// Failures that can happen while editing one sidecar file.
///
/// Every variant except [`SidecarError::Cancelled`] is local to the file being
/// processed: the batch reports it and moves on to the next video.
#[derive(Error, Debug)]
pub enum SidecarError {
    /// Sidecar file could not be opened or created
    #[error("file '{}' couldn't be opened: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing sidecar content is not a valid mapping
    #[error("file '{}' couldn't be parsed: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: RecordParseError,
    },

    /// Duration answer is not a usable number of seconds
    #[error("invalid duration for '{}': {source}", path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConversionError,
    },

    /// Reading, prompting or writing failed after the file was opened
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User interrupted the duration prompt; the whole batch stops
    #[error("interrupted while editing '{}'", path.display())]
    Cancelled { path: PathBuf },
}

impl SidecarError {
    /// Sidecar path the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            SidecarError::Open { path, .. }
            | SidecarError::Parse { path, .. }
            | SidecarError::Conversion { path, .. }
            | SidecarError::Io { path, .. }
            | SidecarError::Cancelled { path } => path,
        }
    }

    /// Whether this error must abort the remaining files of the batch
    pub fn aborts_batch(&self) -> bool {
        matches!(self, SidecarError::Cancelled { .. })
    }
}
