//! Task submission and status envelope types.
//!
//! `GET /api/task/{task_id}` returns a JSON envelope with a string
//! `task_status` field and optional progress/result payloads. This module
//! deserializes the envelope and converts it into a strongly-typed
//! [`TaskUpdate`]. Unknown status strings surface as [`TaskError`] values
//! rather than being silently ignored.

use serde::Deserialize;

/// Status string for a task that is queued but not yet picked up.
pub const STATUS_PENDING: &str = "PENDING";
/// Status string for a task the worker is actively processing.
pub const STATUS_PROGRESS: &str = "PROGRESS";
/// Status string for a task that completed with a result.
pub const STATUS_SUCCESS: &str = "SUCCESS";
/// Status string for a task that failed.
pub const STATUS_FAILURE: &str = "FAILURE";

/// Text substituted for a queued task whose envelope carries no progress
/// payload. The backend only attaches `task_progress` once the worker has
/// started reporting, so freshly queued tasks arrive as bare PENDING.
pub const PENDING_FALLBACK_MESSAGE: &str = "Waiting for the task to start...";

/// Response body returned by the submission endpoints once a task is queued.
///
/// A response without a `task_id` fails deserialization, which the client
/// treats as a submission error.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAccepted {
    /// Server-assigned identifier for the queued task.
    pub task_id: String,
    /// Human-readable acknowledgement, if the server sends one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw status envelope for one task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEnvelope {
    pub task_id: String,
    /// Status tag; see the `STATUS_*` constants for the known values.
    pub task_status: String,
    /// Worker progress; only present once the worker reports it.
    #[serde(default)]
    pub task_progress: Option<TaskProgress>,
    /// Final result; only present on success.
    #[serde(default)]
    pub task_result: Option<TaskResult>,
}

/// Worker-reported progress for a running task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskProgress {
    #[serde(default)]
    pub message: String,
    /// Completion percentage as reported by the worker. Clamped into
    /// 0-100 during conversion; the wire value is not trusted.
    #[serde(default)]
    pub current: i64,
}

/// Final payload of a completed transcription task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskResult {
    /// Plain transcription text.
    pub transcription: String,
    /// Summary as an HTML fragment. Carried verbatim; rendering decides
    /// how (or whether) to interpret the markup.
    pub summary: String,
}

/// Typed view of one status envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUpdate {
    /// Queued, not yet picked up by a worker.
    Pending { message: String },
    /// Running. `current` is a percentage in 0-100.
    Progress { current: u8, message: String },
    /// Terminal: completed with a result.
    Succeeded(TaskResult),
    /// Terminal: failed. The envelope carries no failure payload.
    Failed,
}

impl TaskUpdate {
    /// Whether this update ends the polling loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskUpdate::Succeeded(_) | TaskUpdate::Failed)
    }
}

/// Errors converting a wire envelope into a [`TaskUpdate`].
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The server reported a status string this client does not know.
    #[error("Unknown task status {0:?}")]
    UnknownStatus(String),

    /// A SUCCESS envelope arrived without a `task_result` body.
    #[error("Task {0} reported SUCCESS without a result")]
    MissingResult(String),
}

impl TryFrom<TaskEnvelope> for TaskUpdate {
    type Error = TaskError;

    fn try_from(envelope: TaskEnvelope) -> Result<Self, Self::Error> {
        match envelope.task_status.as_str() {
            STATUS_PENDING => {
                let message = envelope
                    .task_progress
                    .map(|p| p.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| PENDING_FALLBACK_MESSAGE.to_string());
                Ok(TaskUpdate::Pending { message })
            }
            STATUS_PROGRESS => {
                let progress = envelope.task_progress.unwrap_or_default();
                Ok(TaskUpdate::Progress {
                    current: progress.current.clamp(0, 100) as u8,
                    message: progress.message,
                })
            }
            STATUS_SUCCESS => envelope
                .task_result
                .map(TaskUpdate::Succeeded)
                .ok_or(TaskError::MissingResult(envelope.task_id)),
            STATUS_FAILURE => Ok(TaskUpdate::Failed),
            _ => Err(TaskError::UnknownStatus(envelope.task_status)),
        }
    }
}
