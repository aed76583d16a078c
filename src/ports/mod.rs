// Ports - Capabilities injected into the interactors

use std::io;
use std::path::Path;

use crate::domain::model::DurationReply;
use crate::error::ToolsResult;

/// Port for asking the user how long a video is
pub trait DurationProvider {
    /// Ask for the duration, in seconds, of `video` whose sidecar is `sidecar`.
    ///
    /// Blocks until a line is entered, the input ends, or the user interrupts.
    fn request_duration(&mut self, video: &Path, sidecar: &Path) -> io::Result<DurationReply>;

    /// Whether the user already interrupted, outside of any prompt
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Port for retrieving remote assets
pub trait Fetcher {
    /// Download the body behind `url`
    fn fetch(&self, url: &str) -> ToolsResult<Vec<u8>>;
}
