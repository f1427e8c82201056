//! Submit-and-poll client for the transcription service.
//!
//! [`controller::Transcriber`] submits an audio source, then polls the
//! per-task status endpoint on a fixed interval, driving a host-provided
//! [`render::ProgressRenderer`] until the task reaches a terminal state.

pub mod api;
pub mod controller;
pub mod poller;
pub mod render;
pub mod session;
