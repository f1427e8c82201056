//! REST API client for the transcription service HTTP endpoints.
//!
//! Wraps the submission routes (file upload, remote URL) and the per-task
//! status endpoint using [`reqwest`].

use std::path::{Path, PathBuf};

use scriba_core::task::{SubmitAccepted, TaskEnvelope};

/// Audio source submitted for transcription.
///
/// Mirrors the two submission routes the service exposes: a local audio
/// file uploaded as multipart form data, or a video URL the server
/// downloads the audio track from.
#[derive(Debug, Clone)]
pub enum TaskSource {
    /// Local audio file, uploaded under the `audio_file` form field.
    AudioFile(PathBuf),
    /// Remote video URL, posted under the `url` form field.
    RemoteUrl(String),
}

/// HTTP client for a single transcription service instance.
#[derive(Clone)]
pub struct TranscribeApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the transcription REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Transcription API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The local audio file could not be read before upload.
    #[error("Failed to read audio file {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TranscribeApi {
    /// Create a new API client for a transcription service.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base HTTP URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit an audio source, dispatching to the route it belongs to.
    pub async fn submit(&self, source: &TaskSource) -> Result<SubmitAccepted, ApiError> {
        match source {
            TaskSource::AudioFile(path) => self.submit_file(path).await,
            TaskSource::RemoteUrl(url) => self.submit_url(url).await,
        }
    }

    /// Upload a local audio file for transcription.
    ///
    /// Sends a `POST /api/transcribe/file` multipart request with the file
    /// contents under the `audio_file` field. Returns the server-assigned
    /// task ID.
    pub async fn submit_file(&self, path: &Path) -> Result<SubmitAccepted, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::ReadSource {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        let form = reqwest::multipart::Form::new().part(
            "audio_file",
            reqwest::multipart::Part::bytes(bytes).file_name(file_name),
        );

        let response = self
            .client
            .post(format!("{}/api/transcribe/file", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Submit a remote video URL for transcription.
    ///
    /// Sends a `POST /api/transcribe/url` form request. The server downloads
    /// the audio track itself. Returns the server-assigned task ID.
    pub async fn submit_url(&self, url: &str) -> Result<SubmitAccepted, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/transcribe/url", self.base_url))
            .form(&[("url", url)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the current status envelope for a task.
    ///
    /// Sends a `GET /api/task/{task_id}` request.
    pub async fn task_status(&self, task_id: &str) -> Result<TaskEnvelope, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/task/{}", self.base_url, task_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
