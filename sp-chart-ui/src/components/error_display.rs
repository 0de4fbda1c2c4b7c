//! Dismissable error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Optional dismiss handler; renders a close button when present
    #[props(default)]
    pub on_dismiss: Option<EventHandler<MouseEvent>>,
}

/// Displays an error message in a styled box, scoped to one panel.
/// Errors never unmount the rest of the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between; align-items: center;",
            div {
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "background: none; border: none; color: #C62828; font-size: 16px; cursor: pointer;",
                    onclick: move |evt| on_dismiss.call(evt),
                    "\u{00d7}"
                }
            }
        }
    }
}
