//! Chart container component with loading and no-data states.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Whether the window produced no data; shows the no-data affordance
    /// instead of an empty chart
    #[props(default = false)]
    pub empty: bool,
    /// Optional minimum height in pixels
    #[props(default = 360)]
    pub min_height: u32,
}

/// A container div for D3.js charts with loading and no-data overlays.
///
/// An empty window renders an explicit message rather than a blank SVG,
/// so "no data" is never mistaken for a broken chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let overlay_style =
        "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;";

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div { style: "{overlay_style}", "Loading chart..." }
            } else if props.empty {
                div { style: "{overlay_style}", "No data for the selected date range" }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
