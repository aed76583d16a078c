// Domain models - Sidecar records and batch outcomes

use std::fmt;
use std::path::PathBuf;

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::domain::errors::SidecarError;

/// Key holding the file name of the video a sidecar describes
pub const VIDEO_PATH_KEY: &str = "video_path";

/// Key holding the video duration in milliseconds
pub const VIDEO_DURATION_KEY: &str = "video_duration";

/// Why existing sidecar content could not be loaded
#[derive(Error, Debug)]
pub enum RecordParseError {
    /// Content is not valid YAML
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Content is not UTF-8 text
    #[error("not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    /// Content is valid YAML but its root is not a mapping
    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),
}

/// Structured content of one `.yaml` sidecar file.
///
/// Wraps an order-preserving YAML mapping so that keys the editor does not
/// know about survive an edit untouched and in their original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidecarRecord {
    fields: Mapping,
}

impl SidecarRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw text of a sidecar file.
    ///
    /// Empty, whitespace-only, comment-only and `null` documents all load as an
    /// empty record.
    pub fn parse(content: &str) -> Result<Self, RecordParseError> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::new());
        }

        match serde_yaml::from_str::<Value>(content)? {
            Value::Null => Ok(Self::new()),
            Value::Mapping(fields) => Ok(Self { fields }),
            other => Err(RecordParseError::NotAMapping(value_kind(&other))),
        }
    }

    /// Serialize to block-style YAML, one `key: value` line per field
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.fields)
    }

    /// File name of the described video, if recorded as a string
    pub fn video_path(&self) -> Option<&str> {
        self.fields.get(VIDEO_PATH_KEY).and_then(Value::as_str)
    }

    /// Overwrite the recorded video file name
    pub fn set_video_path(&mut self, file_name: impl Into<String>) {
        self.fields
            .insert(Value::from(VIDEO_PATH_KEY), Value::String(file_name.into()));
    }

    /// Recorded duration in milliseconds, if present and non-negative
    pub fn video_duration(&self) -> Option<u64> {
        self.fields.get(VIDEO_DURATION_KEY).and_then(Value::as_u64)
    }

    /// Overwrite the recorded duration in milliseconds
    pub fn set_video_duration(&mut self, millis: u64) {
        self.fields
            .insert(Value::from(VIDEO_DURATION_KEY), Value::from(millis));
    }

    /// Look up any field, known or not
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set any field; existing keys keep their position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(Value::String(key.into()), value.into());
    }

    /// Whether a field is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().filter_map(Value::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Answer given to the duration prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationReply {
    /// A line of text, without its trailing newline
    Line(String),
    /// Input stream reached its end before a line was entered
    EndOfInput,
    /// User interrupted the prompt
    Cancelled,
}

/// Result of processing one video of a batch
#[derive(Debug)]
pub enum FileOutcome {
    /// Sidecar was written; `duration_ms` is set when a new duration was stored
    Updated {
        sidecar: PathBuf,
        duration_ms: Option<u64>,
    },
    /// A file-local error stopped this video, the batch went on
    Failed { sidecar: PathBuf, error: SidecarError },
    /// The prompt for this video was interrupted and the batch stopped here
    Cancelled { sidecar: PathBuf },
}

impl FileOutcome {
    /// Sidecar path this outcome refers to
    pub fn sidecar(&self) -> &PathBuf {
        match self {
            FileOutcome::Updated { sidecar, .. }
            | FileOutcome::Failed { sidecar, .. }
            | FileOutcome::Cancelled { sidecar } => sidecar,
        }
    }

    /// Whether the sidecar was written
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Updated { sidecar, duration_ms: Some(ms) } => {
                write!(f, "updated '{}' (video_duration: {})", sidecar.display(), ms)
            }
            FileOutcome::Updated { sidecar, duration_ms: None } => {
                write!(f, "updated '{}'", sidecar.display())
            }
            FileOutcome::Failed { error, .. } => write!(f, "{}", error),
            FileOutcome::Cancelled { sidecar } => {
                write!(f, "interrupted, '{}' left unchanged", sidecar.display())
            }
        }
    }
}

/// Ordered outcomes of one invocation
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub cancelled: bool,
}

impl BatchReport {
    /// Number of sidecars written
    pub fn updated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_updated()).count()
    }

    /// Number of videos that failed with a file-local error
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }
}
