//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared application state for all Social Pulse page apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the page is waiting on its first data load
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Start date for window filtering ("YYYY-MM-DD", empty until seeded)
    pub start_date: Signal<String>,
    /// End date for window filtering
    pub end_date: Signal<String>,
    /// Earliest date the dataset covers (from the meta fetch)
    pub min_date: Signal<String>,
    /// Latest date the dataset covers
    pub max_date: Signal<String>,
    /// Generation counter for in-flight fetches
    pub request_seq: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            request_seq: Signal::new(0),
        }
    }

    /// Start a new logical fetch and return its generation token.
    ///
    /// Uses `peek` so starting a request does not itself subscribe the
    /// caller to the counter.
    pub fn begin_request(&mut self) -> u64 {
        let next = *self.request_seq.peek() + 1;
        self.request_seq.set(next);
        next
    }

    /// Whether `token` is still the latest generation. Responses holding
    /// a superseded token must be discarded, not committed.
    pub fn is_current(&self, token: u64) -> bool {
        *self.request_seq.peek() == token
    }
}
