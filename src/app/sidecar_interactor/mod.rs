// Sidecar interactor - Creates or updates the `.yaml` sidecar of each video

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::domain::errors::SidecarError;
use crate::domain::model::{
    BatchReport, DurationReply, FileOutcome, RecordParseError, SidecarRecord,
};
use crate::ports::DurationProvider;
use crate::utils::path::{sidecar_path_for, video_file_name};
use crate::utils::time::seconds_to_millis;

/// Interactor for the sidecar editing use case.
///
/// `provider` answers the duration prompt; `status` receives one human
/// readable line per opened, failed or interrupted sidecar.
pub struct SidecarInteractor<P, W> {
    provider: P,
    status: W,
}

impl<P: DurationProvider, W: Write> SidecarInteractor<P, W> {
    /// Create new sidecar interactor with injected prompt and status output
    pub fn new(provider: P, status: W) -> Self {
        Self { provider, status }
    }

    /// Status output written so far
    pub fn status(&self) -> &W {
        &self.status
    }

    /// Take back the injected provider and status output
    pub fn into_parts(self) -> (P, W) {
        (self.provider, self.status)
    }

    /// Edit the sidecar of every video in order.
    ///
    /// File-local failures are reported and skipped. An interrupted prompt
    /// stops the loop: later videos are not opened.
    pub fn run_batch<I, T>(&mut self, videos: I) -> BatchReport
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let mut report = BatchReport::default();

        for video in videos {
            if self.provider.is_cancelled() {
                warn!("Interrupted before the next sidecar was opened");
                self.announce("interrupted, remaining files skipped");
                report.cancelled = true;
                break;
            }

            let video = video.as_ref();
            let sidecar = sidecar_path_for(video);

            match self.process(video) {
                Ok(duration_ms) => {
                    info!(sidecar = %sidecar.display(), ?duration_ms, "Sidecar updated");
                    report.outcomes.push(FileOutcome::Updated {
                        sidecar,
                        duration_ms,
                    });
                }
                Err(err) if err.aborts_batch() => {
                    warn!("{}, abandoning remaining files", err);
                    let outcome = FileOutcome::Cancelled { sidecar };
                    self.announce(&outcome);
                    report.outcomes.push(outcome);
                    report.cancelled = true;
                    break;
                }
                Err(err) => {
                    error!("{}", err);
                    self.announce(&err);
                    report.outcomes.push(FileOutcome::Failed {
                        sidecar,
                        error: err,
                    });
                }
            }
        }

        report
    }

    /// Create or update the sidecar of one video.
    ///
    /// Returns the duration stored by this edit, if the user gave one. The
    /// sidecar handle is dropped on every path; nothing is written unless the
    /// whole edit succeeded.
    pub fn process(&mut self, video: &Path) -> Result<Option<u64>, SidecarError> {
        let sidecar = sidecar_path_for(video);
        debug!(video = %video.display(), sidecar = %sidecar.display(), "Opening sidecar");

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&sidecar)
            .map_err(|source| SidecarError::Open {
                path: sidecar.clone(),
                source,
            })?;
        self.announce(format_args!("editing '{}'", sidecar.display()));

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|source| io_error(&sidecar, source))?;

        let mut record = String::from_utf8(raw)
            .map_err(RecordParseError::from)
            .and_then(|content| SidecarRecord::parse(&content))
            .map_err(|source| SidecarError::Parse {
                path: sidecar.clone(),
                source,
            })?;
        record.set_video_path(video_file_name(video));

        let reply = self
            .provider
            .request_duration(video, &sidecar)
            .map_err(|source| io_error(&sidecar, source))?;

        let duration_ms = match reply {
            DurationReply::Line(text) => {
                let millis = seconds_to_millis(&text).map_err(|source| SidecarError::Conversion {
                    path: sidecar.clone(),
                    source,
                })?;
                record.set_video_duration(millis);
                Some(millis)
            }
            DurationReply::EndOfInput => None,
            DurationReply::Cancelled => return Err(SidecarError::Cancelled { path: sidecar }),
        };

        let yaml = record
            .to_yaml()
            .map_err(|e| io_error(&sidecar, io::Error::new(io::ErrorKind::InvalidData, e)))?;

        // Append mode writes at the end, which is the start once truncated.
        file.set_len(0)
            .and_then(|_| file.write_all(yaml.as_bytes()))
            .and_then(|_| file.flush())
            .map_err(|source| io_error(&sidecar, source))?;

        Ok(duration_ms)
    }

    fn announce(&mut self, line: impl fmt::Display) {
        if let Err(e) = writeln!(self.status, "{}", line).and_then(|_| self.status.flush()) {
            warn!("Failed to write status line: {}", e);
        }
    }
}

fn io_error(sidecar: &Path, source: io::Error) -> SidecarError {
    SidecarError::Io {
        path: PathBuf::from(sidecar),
        source,
    }
}
