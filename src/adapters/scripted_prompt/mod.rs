// Scripted prompt adapter - Replays canned answers to the duration prompt

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::model::DurationReply;
use crate::ports::DurationProvider;

/// Duration provider answering from a fixed script.
///
/// Once the script runs out every further prompt sees end-of-input, like a
/// closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedDurationProvider {
    replies: VecDeque<DurationReply>,
    asked: Vec<PathBuf>,
    interrupt_after: Option<usize>,
}

impl ScriptedDurationProvider {
    /// Create a provider that answers with `replies` in order
    pub fn new(replies: impl IntoIterator<Item = DurationReply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
            interrupt_after: None,
        }
    }

    /// Simulate Ctrl-C pressed once `prompts` prompts have been answered
    pub fn interrupt_after(mut self, prompts: usize) -> Self {
        self.interrupt_after = Some(prompts);
        self
    }

    /// Videos prompted for so far, in order
    pub fn asked(&self) -> &[PathBuf] {
        &self.asked
    }
}

impl DurationProvider for ScriptedDurationProvider {
    fn request_duration(&mut self, video: &Path, _sidecar: &Path) -> io::Result<DurationReply> {
        self.asked.push(video.to_path_buf());
        Ok(self.replies.pop_front().unwrap_or(DurationReply::EndOfInput))
    }

    fn is_cancelled(&self) -> bool {
        self.interrupt_after
            .is_some_and(|prompts| self.asked.len() >= prompts)
    }
}
