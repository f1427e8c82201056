//! Renderer seam between the polling controller and its host surface.
//!
//! The controller never touches the output surface directly; every visible
//! effect goes through [`ProgressRenderer`]. Hosts inject their own
//! implementation (a terminal status line, a GUI widget, a test recorder).

use scriba_core::task::TaskResult;

/// Receives every user-visible effect of a transcription session.
///
/// Implementations must be cheap and non-blocking; calls arrive from the
/// polling task at the poll interval.
pub trait ProgressRenderer: Send + Sync {
    /// A task was accepted: clear the output surface and show an empty
    /// progress indicator.
    fn progress_started(&self);

    /// The task is queued; show the waiting message.
    fn pending(&self, message: &str);

    /// The task is running. `current` is a percentage in 0-100; the
    /// conventional presentation is a fill at `current`% with the text
    /// `"{message} {current}%"`.
    fn progress(&self, current: u8, message: &str);

    /// Terminal success: remove the progress indicator and render the
    /// transcription and summary verbatim.
    fn succeeded(&self, result: &TaskResult);

    /// Terminal failure: remove the progress indicator and render the
    /// fixed failure message. Takes no payload; the rendering is the same
    /// regardless of how the task failed.
    fn failed(&self);

    /// The submission itself failed; render the generic failure message.
    /// No progress indicator exists at this point.
    fn submission_failed(&self);

    /// The submission request has settled (either way); hide the loading
    /// indicator. Called exactly once per submission, before any status
    /// poll.
    fn loading_finished(&self);
}
