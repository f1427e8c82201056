//! Fixed-interval status polling loop.
//!
//! Fetches `/api/task/{task_id}` once per tick, converts the envelope into
//! a [`TaskUpdate`], and dispatches it to the renderer. The loop owns its
//! timer, so every exit path stops the periodic work. Polling is bounded
//! twice over: a wall-clock deadline and a consecutive-tick-error budget.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use scriba_core::task::{TaskError, TaskResult, TaskUpdate};

use crate::api::{ApiError, TranscribeApi};
use crate::render::ProgressRenderer;

/// Tunable parameters for the polling loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between status checks.
    pub interval: Duration,
    /// Upper bound on the total polling duration. The default matches the
    /// server-side hard task time limit, so a task the server would have
    /// killed anyway never keeps a client polling.
    pub deadline: Duration,
    /// Consecutive failed ticks tolerated before giving up. The counter
    /// resets on every successful tick.
    pub max_consecutive_errors: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            deadline: Duration::from_secs(3600),
            max_consecutive_errors: 5,
        }
    }
}

/// Terminal outcome of one polling session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The task completed; carries the final result.
    Succeeded(TaskResult),
    /// The task reported FAILURE.
    Failed,
    /// The task did not reach a terminal state before the deadline.
    DeadlineExceeded,
    /// Too many consecutive status checks failed.
    Errored,
    /// The session was cancelled.
    Cancelled,
}

/// Errors a single status tick can produce.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// The status fetch failed (transport or non-2xx).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The envelope could not be converted (unknown status, missing result).
    #[error(transparent)]
    Status(#[from] TaskError),
}

/// Poll `task_id` until a terminal update, the deadline, cancellation, or
/// an exhausted error budget.
///
/// The first check happens one full interval after the call, matching the
/// submission-then-wait schedule of the service's own frontend.
pub(crate) async fn run_poll_loop(
    api: TranscribeApi,
    task_id: String,
    config: PollConfig,
    renderer: Arc<dyn ProgressRenderer>,
    cancel: CancellationToken,
) -> PollOutcome {
    let start = tokio::time::Instant::now();
    let deadline = start + config.deadline;
    let mut interval = tokio::time::interval_at(start + config.interval, config.interval);
    // A slow status response delays the next tick instead of letting
    // missed ticks fire back-to-back; ticks never overlap.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut consecutive_errors: u32 = 0;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(task_id = %task_id, "Polling cancelled");
                return PollOutcome::Cancelled;
            }
            _ = interval.tick() => {}
        }

        if tokio::time::Instant::now() >= deadline {
            tracing::warn!(
                task_id = %task_id,
                deadline_secs = config.deadline.as_secs(),
                "Polling deadline exceeded",
            );
            renderer.failed();
            return PollOutcome::DeadlineExceeded;
        }

        match poll_once(&api, &task_id).await {
            Ok(update) => {
                consecutive_errors = 0;
                match update {
                    TaskUpdate::Pending { message } => renderer.pending(&message),
                    TaskUpdate::Progress { current, message } => {
                        renderer.progress(current, &message)
                    }
                    TaskUpdate::Succeeded(result) => {
                        tracing::info!(task_id = %task_id, "Task completed");
                        renderer.succeeded(&result);
                        return PollOutcome::Succeeded(result);
                    }
                    TaskUpdate::Failed => {
                        tracing::warn!(task_id = %task_id, "Task failed");
                        renderer.failed();
                        return PollOutcome::Failed;
                    }
                }
            }
            Err(e) => {
                consecutive_errors += 1;
                tracing::warn!(
                    task_id = %task_id,
                    error = %e,
                    consecutive_errors,
                    "Status check failed",
                );
                if consecutive_errors >= config.max_consecutive_errors {
                    tracing::error!(
                        task_id = %task_id,
                        "Giving up after {consecutive_errors} failed status checks",
                    );
                    renderer.failed();
                    return PollOutcome::Errored;
                }
            }
        }
    }
}

/// One fetch-and-convert cycle.
async fn poll_once(api: &TranscribeApi, task_id: &str) -> Result<TaskUpdate, TickError> {
    let envelope = api.task_status(task_id).await?;
    Ok(TaskUpdate::try_from(envelope)?)
}
