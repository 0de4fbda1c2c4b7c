//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use sp_utils::dates::{end_input_bounds, start_input_bounds};

/// Date range picker for windowing the dashboard data.
///
/// Each input's `min`/`max` attributes come from the other boundary and
/// the dataset bounds, so the browser itself prevents a reversed range.
/// A start equal to the end is allowed (a one-day window).
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min_date = (state.min_date)();
    let max_date = (state.max_date)();

    let (start_min, start_max) = start_input_bounds(&end, &min_date, &max_date);
    let (end_min, end_max) = end_input_bounds(&start, &min_date, &max_date);

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{start_min}",
                    max: "{start_max}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{end_min}",
                    max: "{end_max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
