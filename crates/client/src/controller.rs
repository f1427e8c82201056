//! Submit-and-poll controller.
//!
//! [`Transcriber`] ties the pieces together: submit an audio source, hand
//! the loading/progress transitions to the renderer, and spawn the polling
//! loop as a background task wrapped in a [`PollSession`].

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, TaskSource, TranscribeApi};
use crate::poller::{run_poll_loop, PollConfig};
use crate::render::ProgressRenderer;
use crate::session::PollSession;

/// Submits transcription tasks and drives the status polling loop.
pub struct Transcriber {
    api: TranscribeApi,
    config: PollConfig,
}

impl Transcriber {
    /// Create a controller for the service at `base_url` with default
    /// polling parameters.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_api(TranscribeApi::new(base_url), PollConfig::default())
    }

    /// Build from an existing API wrapper and polling parameters.
    pub fn from_api(api: TranscribeApi, config: PollConfig) -> Self {
        Self { api, config }
    }

    /// Replace the polling parameters.
    pub fn with_config(mut self, config: PollConfig) -> Self {
        self.config = config;
        self
    }

    /// Submit `source` and start polling its task status.
    ///
    /// On a successful submission the loading indicator is hidden, the
    /// progress indicator appears, and a background task polls the status
    /// endpoint until a terminal update. The returned [`PollSession`] can
    /// be joined for the outcome or cancelled; dropping it leaves the
    /// polling running to completion.
    ///
    /// On a submission failure (transport error or non-2xx response) the
    /// renderer shows the generic failure message, no polling starts, and
    /// the error is returned. The loading indicator is hidden exactly once
    /// on both paths, before any status poll.
    pub async fn transcribe(
        &self,
        source: &TaskSource,
        renderer: Arc<dyn ProgressRenderer>,
    ) -> Result<PollSession, ApiError> {
        let accepted = match self.api.submit(source).await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "Transcription submission failed");
                renderer.submission_failed();
                renderer.loading_finished();
                return Err(e);
            }
        };

        tracing::info!(task_id = %accepted.task_id, "Transcription task queued");
        renderer.loading_finished();
        renderer.progress_started();

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_poll_loop(
            self.api.clone(),
            accepted.task_id.clone(),
            self.config.clone(),
            Arc::clone(&renderer),
            cancel.child_token(),
        ));

        Ok(PollSession::new(accepted.task_id, handle, cancel))
    }
}
