//! Generic labeled dropdown for category filters.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// Label before the dropdown (e.g. "Sentiment: ")
    pub label: String,
    /// DOM id for the select element
    pub id: String,
    /// (value, display text) pairs; include an "all" entry explicitly
    pub options: Vec<(String, String)>,
    /// Currently selected value
    pub selected: String,
    /// Called with the newly selected value
    pub on_change: EventHandler<String>,
}

/// Dropdown selector bound to a category filter.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                for (value, text) in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.selected,
                        "{text}"
                    }
                }
            }
        }
    }
}
