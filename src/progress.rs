// src/progress.rs
/// Progress reporting for the search pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the number of items, if known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One posting was fetched and extracted.
    fn item_done(&mut self, _job_id: &str) {}

    /// One posting could not be fetched; the run continues.
    fn item_failed(&mut self, _job_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
