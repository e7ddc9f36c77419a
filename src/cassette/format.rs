//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// A recorded session: every port interaction of one run, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording binary was built from, or `"unknown"`.
    pub commit: String,
    /// The interactions, ordered by `seq`.
    pub interactions: Vec<Interaction>,
}

/// One port call and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the recording.
    pub seq: u64,
    /// Port name, e.g. `"image_generator"` or `"prompt_translator"`.
    pub port: String,
    /// Method name on the port, e.g. `"generate"`.
    pub method: String,
    /// Serialized request value.
    pub input: serde_json::Value,
    /// Serialized outcome, as `{"Ok": ...}` or `{"Err": {...}}`.
    pub output: serde_json::Value,
}

/// Serialized form of a failed port call.
///
/// API errors keep their HTTP status so a replayed failure reads the same
/// as the live one; other error kinds are recorded with status 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedFailure {
    /// HTTP status of the original failure, 0 when not an API error.
    pub status: u16,
    /// Error display text.
    pub message: String,
}

impl RecordedFailure {
    /// Capture an error for recording.
    #[must_use]
    pub fn from_error(err: &GenError) -> Self {
        match err {
            GenError::Api { status, message } => {
                Self { status: *status, message: message.clone() }
            }
            other => Self { status: 0, message: other.to_string() },
        }
    }

    /// Reconstruct an error during replay.
    #[must_use]
    pub fn into_error(self) -> GenError {
        GenError::Api { status: self.status, message: self.message }
    }
}
