// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Progress sink writing to the shared status line. `noun` names the unit
/// being fetched ("entry", "species") so both long passes read naturally.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    noun: &'static str,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, noun: &'static str) -> Self {
        Self { status, noun, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, id: u32) {
        self.done += 1;
        self.set_status(format!(
            "Fetched {} {} ({}/{})",
            self.noun,
            id,
            self.done + self.failed,
            self.total
        ));
    }
    fn item_failed(&mut self, id: u32) {
        self.failed += 1;
        self.set_status(format!(
            "Failed {} {} ({}/{})",
            self.noun,
            id,
            self.done + self.failed,
            self.total
        ));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete")); // no counts if we never began
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
