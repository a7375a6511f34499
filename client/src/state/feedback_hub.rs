//! Admin feedback triage state.
//!
//! DESIGN
//! ======
//! The full list is fetched once and filtered, searched, and paged locally.
//! The stored page index is a request; the effective page is always clamped
//! against the current filtered count so a shrinking list never strands the
//! view past its end.

#[cfg(test)]
#[path = "feedback_hub_test.rs"]
mod feedback_hub_test;

use records::{Feedback, FeedbackStats};

use crate::util::triage::{Page, TriageFilter, count_label, filter_items};

#[derive(Clone, Debug, Default)]
pub struct FeedbackHubState {
    pub items: Vec<Feedback>,
    pub stats: Option<FeedbackStats>,
    pub filter: TriageFilter,
    pub page_index: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Item whose status update is in flight.
    pub updating_id: Option<String>,
}

impl FeedbackHubState {
    /// Replace the filter and go back to the first page.
    pub fn set_filter(&mut self, filter: TriageFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.page_index = 0;
        }
    }

    /// Store a fresh list and stats, clamping the page.
    pub fn loaded(&mut self, items: Vec<Feedback>, stats: FeedbackStats) {
        self.items = items;
        self.stats = Some(stats);
        self.loading = false;
        self.error = None;
        self.updating_id = None;
        self.page_index = self.page().index;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.updating_id = None;
        self.error = Some(message);
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&Feedback> {
        filter_items(&self.items, &self.filter)
    }

    #[must_use]
    pub fn page(&self) -> Page {
        Page::new(self.page_index, self.filtered().len())
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible(&self) -> Vec<Feedback> {
        let filtered = self.filtered();
        self.page().slice(&filtered).iter().map(|f| (*f).clone()).collect()
    }

    #[must_use]
    pub fn heading(&self) -> String {
        count_label(self.filtered().len())
    }

    pub fn next_page(&mut self) {
        let page = self.page();
        if page.has_next() {
            self.page_index = page.index + 1;
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.page();
        if page.has_prev() {
            self.page_index = page.index - 1;
        }
    }
}
