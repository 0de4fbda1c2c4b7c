//! Loading indicator.

use dioxus::prelude::*;

/// Simple loading indicator shown while a page waits on its first fetch.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading dashboard data..."
        }
    }
}
