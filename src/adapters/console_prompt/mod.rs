// Console prompt adapter - Reads durations from stdin, notices Ctrl-C

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::domain::model::DurationReply;
use crate::error::ToolsResult;
use crate::ports::DurationProvider;
use crate::utils::path::video_file_name;

/// How long end-of-input waits for an interrupt that closed stdin with it
const INTERRUPT_GRACE: Duration = Duration::from_millis(200);

enum PromptEvent {
    Line(String),
    Eof,
    Interrupt,
    Failed(io::Error),
}

/// Interactive duration prompt on stdin/stdout.
///
/// A reader thread reads exactly one line per prompt and the Ctrl-C handler
/// posts to the same channel, so a prompt returns on whichever comes first.
/// The handler also raises a shared flag, checked before each sidecar is
/// opened. Only one instance may exist per process.
pub struct ConsoleDurationProvider {
    requests: Sender<()>,
    events: Receiver<PromptEvent>,
    interrupted: Arc<AtomicBool>,
    exhausted: bool,
}

impl ConsoleDurationProvider {
    /// Install the interrupt handler and start the stdin reader
    pub fn new() -> ToolsResult<Self> {
        let (event_tx, events) = mpsc::channel();
        let interrupted = Arc::new(AtomicBool::new(false));

        let interrupt_tx = event_tx.clone();
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
            let _ = interrupt_tx.send(PromptEvent::Interrupt);
        })?;

        let (requests, request_rx) = mpsc::channel();
        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || read_lines(request_rx, event_tx))?;

        Ok(Self {
            requests,
            events,
            interrupted,
            exhausted: false,
        })
    }

    /// Stdin ended; an interrupt sent together with it still wins
    fn end_of_input(&mut self) -> DurationReply {
        self.exhausted = true;
        if self.is_cancelled() {
            return DurationReply::Cancelled;
        }
        match self.events.recv_timeout(INTERRUPT_GRACE) {
            Ok(PromptEvent::Interrupt) => DurationReply::Cancelled,
            Ok(_) | Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                DurationReply::EndOfInput
            }
        }
    }
}

impl DurationProvider for ConsoleDurationProvider {
    fn request_duration(&mut self, video: &Path, _sidecar: &Path) -> io::Result<DurationReply> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "duration in seconds of '{}': ", video_file_name(video))?;
            stdout.flush()?;
        }

        if self.exhausted {
            println!();
            if self.is_cancelled() {
                return Ok(DurationReply::Cancelled);
            }
            return Ok(DurationReply::EndOfInput);
        }

        self.requests
            .send(())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "stdin reader stopped"))?;

        let reply = match self.events.recv() {
            Ok(PromptEvent::Line(line)) => DurationReply::Line(line),
            Ok(PromptEvent::Eof) | Err(_) => self.end_of_input(),
            Ok(PromptEvent::Interrupt) => DurationReply::Cancelled,
            Ok(PromptEvent::Failed(e)) => return Err(e),
        };

        if !matches!(reply, DurationReply::Line(_)) {
            println!();
        }
        Ok(reply)
    }

    fn is_cancelled(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

fn read_lines(requests: Receiver<()>, events: Sender<PromptEvent>) {
    let stdin = io::stdin();

    while requests.recv().is_ok() {
        let mut line = String::new();
        let event = match stdin.lock().read_line(&mut line) {
            Ok(0) => PromptEvent::Eof,
            Ok(_) => PromptEvent::Line(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => PromptEvent::Failed(e),
        };

        let finished = matches!(event, PromptEvent::Eof);
        if events.send(event).is_err() || finished {
            break;
        }
    }

    debug!("stdin reader finished");
}
