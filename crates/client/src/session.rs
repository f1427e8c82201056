//! Polling session lifecycle.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::poller::PollOutcome;

/// Handle to one in-flight polling session.
///
/// Owns the spawned poll task and its cancellation token. Polling stops on
/// its own at a terminal status, at the deadline, or after exhausting the
/// tick error budget; [`cancel`](Self::cancel) stops it early. Dropping the
/// handle detaches the task without stopping it -- the session is
/// fire-and-forget unless the holder joins or cancels it.
#[derive(Debug)]
pub struct PollSession {
    task_id: String,
    handle: JoinHandle<PollOutcome>,
    cancel: CancellationToken,
}

impl PollSession {
    pub(crate) fn new(
        task_id: String,
        handle: JoinHandle<PollOutcome>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            task_id,
            handle,
            cancel,
        }
    }

    /// Server-assigned ID of the task being watched.
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Request cooperative cancellation of the polling loop.
    ///
    /// The loop observes the token on its next tick wait. Await
    /// [`join`](Self::join) to see the `Cancelled` outcome.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the polling loop to reach its terminal outcome.
    pub async fn join(self) -> PollOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(task_id = %self.task_id, error = %e, "Poll task aborted");
                PollOutcome::Cancelled
            }
        }
    }
}
