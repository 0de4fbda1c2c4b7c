//! Single-number KPI card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct KpiCardProps {
    /// Label above the value (e.g. "Total Mentions")
    pub title: String,
    /// The headline value, preformatted
    pub value: String,
    /// Optional line under the value (e.g. "across 12 themes")
    #[props(default = String::new())]
    pub subtitle: String,
    /// Accent color for the value text
    #[props(default = String::from("#1565C0"))]
    pub accent: String,
}

/// A small card showing one headline number.
#[component]
pub fn KpiCard(props: KpiCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 16px; background: #fff; border: 1px solid #E0E0E0; border-radius: 6px;",
            div {
                style: "font-size: 12px; color: #666; text-transform: uppercase; letter-spacing: 0.05em;",
                "{props.title}"
            }
            div {
                style: "font-size: 28px; font-weight: bold; margin: 4px 0; color: {props.accent};",
                "{props.value}"
            }
            if !props.subtitle.is_empty() {
                div {
                    style: "font-size: 12px; color: #888;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
