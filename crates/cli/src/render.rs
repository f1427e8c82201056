//! Terminal rendering of task progress and results.
//!
//! The status line (loading text, progress bar) is redrawn in place on
//! stderr; the final transcription and summary go to stdout so they can be
//! piped.

use std::io::Write;

use scriba_client::render::ProgressRenderer;
use scriba_core::task::TaskResult;

/// Fixed message for a task that reported FAILURE (or that polling gave
/// up on).
const FAILURE_MESSAGE: &str = "Transcription failed. Please try again later.";

/// Generic message for a failed submission.
const SUBMISSION_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Progress bar width in characters.
const BAR_WIDTH: usize = 30;

/// How many bar cells a percentage fills.
fn filled_cells(current: u8) -> usize {
    BAR_WIDTH * usize::from(current) / 100
}

/// Renders the polling session as an in-place status line on stderr.
pub struct TermRenderer;

impl TermRenderer {
    fn draw_status_line(&self, filled: usize, text: &str) {
        let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r\x1b[2K[{bar}] {text}");
        let _ = err.flush();
    }

    fn clear_status_line(&self) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r\x1b[2K");
        let _ = err.flush();
    }
}

impl ProgressRenderer for TermRenderer {
    fn progress_started(&self) {
        self.draw_status_line(0, "");
    }

    fn pending(&self, message: &str) {
        self.draw_status_line(0, message);
    }

    fn progress(&self, current: u8, message: &str) {
        self.draw_status_line(filled_cells(current), &format!("{message} {current}%"));
    }

    fn succeeded(&self, result: &TaskResult) {
        self.clear_status_line();
        println!("Transcription result:");
        println!();
        println!("{}", result.transcription);
        println!();
        // The summary is an HTML fragment; it is printed as-is.
        println!("{}", result.summary);
    }

    fn failed(&self) {
        self.clear_status_line();
        eprintln!("{FAILURE_MESSAGE}");
    }

    fn submission_failed(&self) {
        self.clear_status_line();
        eprintln!("{SUBMISSION_FAILURE_MESSAGE}");
    }

    fn loading_finished(&self) {
        self.clear_status_line();
    }
}
