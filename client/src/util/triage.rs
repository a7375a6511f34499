//! Client-side filtering, search, and pagination for admin feedback triage.

#[cfg(test)]
#[path = "triage_test.rs"]
mod triage_test;

use std::str::FromStr;

use records::{Feedback, FeedbackStatus, FeedbackType};

/// Fixed number of rows per page.
pub const PAGE_SIZE: usize = 10;

/// Select value meaning "no filter".
pub const ALL: &str = "all";

/// Active filter controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriageFilter {
    pub kind: Option<FeedbackType>,
    pub status: Option<FeedbackStatus>,
    pub search: String,
}

impl TriageFilter {
    /// Exact match on type and status; case-insensitive substring on message.
    #[must_use]
    pub fn matches(&self, item: &Feedback) -> bool {
        if self.kind.is_some_and(|k| k != item.kind) {
            return false;
        }
        if self.status.is_some_and(|s| s != item.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || item.message.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.status.is_some() || !self.search.trim().is_empty()
    }

    /// Value the type `<select>` should show.
    #[must_use]
    pub fn kind_value(&self) -> &'static str {
        self.kind.map_or(ALL, FeedbackType::as_str)
    }

    /// Value the status `<select>` should show.
    #[must_use]
    pub fn status_value(&self) -> &'static str {
        self.status.map_or(ALL, FeedbackStatus::as_str)
    }
}

/// Parse a `<select>` value, treating [`ALL`] (or garbage) as no filter.
#[must_use]
pub fn parse_select<T: FromStr>(raw: &str) -> Option<T> {
    if raw == ALL { None } else { raw.parse().ok() }
}

/// Items passing `filter`, in their original order.
#[must_use]
pub fn filter_items<'a>(items: &'a [Feedback], filter: &TriageFilter) -> Vec<&'a Feedback> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Heading over the list: `Feedback Items (N)` for the filtered set.
#[must_use]
pub fn count_label(filtered: usize) -> String {
    format!("Feedback Items ({filtered})")
}

/// A page window over `total` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index, clamped to the last page.
    pub index: usize,
    pub total: usize,
    pub size: usize,
}

impl Page {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        Self::with_size(index, total, PAGE_SIZE)
    }

    #[must_use]
    pub fn with_size(index: usize, total: usize, size: usize) -> Self {
        let size = size.max(1);
        let last = total.saturating_sub(1) / size;
        Self { index: index.min(last), total, size }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    /// Zero-based start offset.
    #[must_use]
    pub fn start(&self) -> usize {
        (self.index * self.size).min(self.total)
    }

    /// Exclusive end offset.
    #[must_use]
    pub fn end(&self) -> usize {
        (self.start() + self.size).min(self.total)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.end() < self.total
    }

    /// `Showing A-B of N`, one-based and inclusive.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "Showing 0-0 of 0".to_owned();
        }
        format!("Showing {}-{} of {}", self.start() + 1, self.end(), self.total)
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end().min(items.len());
        let start = self.start().min(end);
        &items[start..end]
    }
}
