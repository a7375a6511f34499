//! App-wide chrome state: connectivity and queued-write count.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug)]
pub struct UiState {
    pub online: bool,
    /// Writes waiting in the offline queue.
    pub pending_sync: usize,
    /// Result of the most recent replay, for the status line.
    pub last_sync: Option<String>,
    /// A flush of the offline queue is running.
    pub syncing: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { online: true, pending_sync: 0, last_sync: None, syncing: false }
    }
}

impl UiState {
    /// Claim the flush slot. `false` when a flush is already running.
    pub fn begin_sync(&mut self) -> bool {
        !std::mem::replace(&mut self.syncing, true)
    }

    pub fn end_sync(&mut self) {
        self.syncing = false;
    }

    #[must_use]
    pub fn banner(&self) -> Option<String> {
        if !self.online {
            return Some("You're offline. Changes will sync when your connection returns.".to_owned());
        }
        match self.pending_sync {
            0 => None,
            1 => Some("1 change waiting to sync".to_owned()),
            n => Some(format!("{n} changes waiting to sync")),
        }
    }
}
