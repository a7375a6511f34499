//! Connectivity detection.
//!
//! A failure is connectivity-class when the browser says it is offline or
//! the error text matches one of the messages browsers and `fetch` produce
//! for dropped connections.

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod connectivity_test;

/// Lowercased substrings that identify a network-level failure.
pub const OFFLINE_MARKERS: [&str; 8] = [
    "failed to fetch",
    "networkerror",
    "network error",
    "network request failed",
    "load failed",
    "disconnected",
    "offline",
    "err_internet_disconnected",
];

/// Whether an error message describes lost connectivity.
#[must_use]
pub fn is_connectivity_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    OFFLINE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// `navigator.onLine`; always `true` off the browser.
pub fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}
