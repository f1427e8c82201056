//! Shared wire-format types for the scriba transcription client.
//!
//! The transcription service reports asynchronous task state as loose JSON
//! envelopes. This crate owns those envelope types and the conversion into
//! a closed, typed status enum that the client layers dispatch on.

pub mod task;
