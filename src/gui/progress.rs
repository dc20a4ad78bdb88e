// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes search progress into state shared with the UI thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    fraction: Arc<Mutex<f32>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, fraction: Arc<Mutex<f32>>) -> Self {
        Self { status, fraction, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    fn set_fraction(&self) {
        let f = if self.total == 0 {
            0.0
        } else {
            (self.done + self.failed) as f32 / self.total as f32
        };
        if let Ok(mut p) = self.fraction.lock() {
            *p = f;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
        self.set_fraction();
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, job_id: &str) {
        self.done += 1;
        self.set_fraction();
        self.set_status(format!("Fetched job {} ({}/{})", job_id, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, job_id: &str) {
        self.failed += 1;
        self.set_fraction();
        self.set_status(format!("Skipped job {} ({}/{})", job_id, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if let Ok(mut p) = self.fraction.lock() {
            *p = 1.0;
        }
        if self.total == 0 {
            self.set_status(s!("Search complete"));
        } else {
            self.set_status(format!("Search complete ({} fetched, {} skipped)", self.done, self.failed));
        }
    }
}
