//! Per-filename download state tracking
//!
//! Each attachment download is keyed by its object filename so independent
//! downloads overlap freely while a second request for the same filename is
//! rejected instead of silently racing.

use std::collections::HashMap;
use std::sync::Mutex;

/// Lifecycle of a single attachment download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Tracks download state per filename
///
/// Interior mutability lets the browser hand out overlapping download
/// futures from a shared reference.
#[derive(Debug, Default)]
pub struct DownloadTracker {
    states: Mutex<HashMap<String, DownloadState>>,
}

impl DownloadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a filename as in flight
    ///
    /// Returns `false` when the filename is already in flight, in which case
    /// the caller must not start another download for it.
    pub fn begin(&self, filename: &str) -> bool {
        let mut states = self.states.lock().expect("download tracker lock");
        match states.get(filename) {
            Some(DownloadState::InFlight) => false,
            _ => {
                states.insert(filename.to_string(), DownloadState::InFlight);
                true
            }
        }
    }

    /// Record the terminal state of a download
    pub fn finish(&self, filename: &str, success: bool) {
        let state = if success {
            DownloadState::Succeeded
        } else {
            DownloadState::Failed
        };
        self.states
            .lock()
            .expect("download tracker lock")
            .insert(filename.to_string(), state);
    }

    /// Current state for a filename; unknown filenames are idle
    pub fn state(&self, filename: &str) -> DownloadState {
        self.states
            .lock()
            .expect("download tracker lock")
            .get(filename)
            .copied()
            .unwrap_or_default()
    }
}
