//! Path utilities for locating sidecar files

use std::path::{Path, PathBuf};

/// Extension given to sidecar files
pub const SIDECAR_EXTENSION: &str = "yaml";

/// Sidecar path for a video: same directory and stem, `.yaml` extension.
///
/// A path without an extension simply gets `.yaml` appended.
pub fn sidecar_path_for(video: &Path) -> PathBuf {
    video.with_extension(SIDECAR_EXTENSION)
}

/// Final component of the video path, as stored in `video_path`
pub fn video_file_name(video: &Path) -> String {
    video
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| video.to_string_lossy().into_owned())
}
