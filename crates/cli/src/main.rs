//! `scriba`: submit an audio source for transcription and watch the task
//! to completion.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriba_client::api::TaskSource;
use scriba_client::controller::Transcriber;
use scriba_client::poller::PollOutcome;

mod config;
mod render;

use config::ClientConfig;
use render::TermRenderer;

/// Submit an audio source to the transcription service and poll the task
/// until it finishes.
#[derive(Parser)]
#[command(name = "scriba", version, about)]
struct Cli {
    /// Base URL of the transcription service (overrides SCRIBA_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe a local audio file.
    File {
        /// Path to the audio file to upload.
        path: PathBuf,
    },
    /// Transcribe the audio track of a remote video URL.
    Url {
        /// Video URL the server downloads the audio from.
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriba=warn,scriba_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let source = match cli.command {
        Command::File { path } => TaskSource::AudioFile(path),
        Command::Url { url } => TaskSource::RemoteUrl(url),
    };

    let transcriber = Transcriber::new(config.api_url).with_config(config.poll);
    let renderer = Arc::new(TermRenderer);

    // Loading indicator: shown until the submission request settles, then
    // cleared by the renderer.
    eprint!("Submitting...");

    let session = match transcriber.transcribe(&source, renderer).await {
        Ok(session) => session,
        // Already rendered and logged; nothing left but the exit code.
        Err(_) => return ExitCode::FAILURE,
    };

    tracing::info!(task_id = %session.task_id(), "Watching task");

    match session.join().await {
        PollOutcome::Succeeded(_) => ExitCode::SUCCESS,
        outcome => {
            tracing::debug!(?outcome, "Polling ended without a result");
            ExitCode::FAILURE
        }
    }
}
