//! Aspect-by-Sentiment Breakdown
//!
//! Cross-tabulates aspects against sentiment: a stacked bar chart with a
//! counts/percent toggle, overall share KPIs, a per-aspect breakdown table,
//! and most-positive / most-negative aspect cards.
//!
//! Two denominators appear on this page and must not be mixed: the table's
//! row percentages divide by each aspect's own total, while the overall
//! share KPIs divide by the grand total across every aspect.

use dioxus::prelude::*;
use sp_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, KpiCard, LoadingSpinner,
};
use sp_chart_ui::js_bridge;
use sp_chart_ui::state::AppState;
use sp_core::analytics::SplitResponse;
use sp_core::api::AnalyticsClient;
use sp_core::aspect::Aspect;
use sp_core::sentiment::Sentiment;
use sp_metrics::split::{aspect_rows, overall_shares, AspectRow};
use sp_metrics::stats::argmax;

/// DOM id for the stacked bar chart container.
const STACKED_CHART_ID: &str = "aspect-sentiment-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aspect-sentiment-root"))
        .launch(App);
}

/// Analytics client rooted at the page origin's `/api` prefix.
fn analytics_client() -> anyhow::Result<AnalyticsClient> {
    AnalyticsClient::new(&format!("{}/api", js_bridge::page_origin()))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut split: Signal<Option<SplitResponse>> = use_signal(|| None);
    let mut as_percent: Signal<bool> = use_signal(|| false);

    // ─── Effect 1: Fetch dataset bounds once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            let client = match analytics_client() {
                Ok(client) => client,
                Err(e) => {
                    state.error_msg.set(Some(format!("Client setup failed: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            match client.meta().await {
                Ok(meta) => {
                    state.min_date.set(meta.date_range.min.clone());
                    state.max_date.set(meta.date_range.max.clone());
                    state.start_date.set(meta.date_range.min);
                    state.end_date.set(meta.date_range.max);
                }
                Err(e) => {
                    log::error!("Meta fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Could not reach the analytics service: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: Fetch the split on window or toggle change ───
    use_effect(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();
        let percent = as_percent();
        if start.is_empty() || end.is_empty() {
            return;
        }

        let token = state.begin_request();
        spawn(async move {
            let client = match analytics_client() {
                Ok(client) => client,
                Err(e) => {
                    state.error_msg.set(Some(format!("Client setup failed: {}", e)));
                    return;
                }
            };

            match client.sentiment_split(&start, &end, percent).await {
                Ok(response) if state.is_current(token) => {
                    split.set(Some(response));
                    state.error_msg.set(None);
                }
                Ok(_) => {}
                Err(e) if state.is_current(token) => {
                    log::error!("Split fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load the aspect breakdown: {}", e)));
                }
                Err(_) => {}
            }
        });
    });

    // ─── Effect 3: Render the stacked bar chart ───
    use_effect(move || {
        let Some(response) = split() else {
            return;
        };
        if response.grand_total() == 0.0 {
            js_bridge::destroy_chart(STACKED_CHART_ID);
            return;
        }

        let percent = as_percent();
        let series = if percent {
            &response.percent
        } else {
            &response.counts
        };
        let bars: Vec<serde_json::Value> = response
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let (positive, neutral, negative) = series.at(i);
                let display = Aspect::parse(label)
                    .map(|a| a.label().to_string())
                    .unwrap_or_else(|| label.clone());
                serde_json::json!({
                    "label": display,
                    "positive": positive,
                    "neutral": neutral,
                    "negative": negative,
                })
            })
            .collect();

        let data_json = serde_json::to_string(&bars).unwrap_or_default();
        let config_json = serde_json::json!({
            "height": 340,
            "yLabel": if percent { "% within aspect" } else { "Mentions" },
        })
        .to_string();

        js_bridge::render_stacked_bar_chart(STACKED_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let split_view = split();
    let rows: Vec<AspectRow> = split_view.as_ref().map(|s| aspect_rows(s)).unwrap_or_default();
    let shares = split_view
        .as_ref()
        .map(|s| overall_shares(s))
        .unwrap_or([0.0; 3]);
    let no_data = split_view
        .as_ref()
        .map(|s| s.grand_total() == 0.0)
        .unwrap_or(false);

    // Rank by within-row percentage so a small aspect with a lopsided
    // mix can still top the list.
    let positive_ranks: Vec<f64> = rows.iter().map(|r| r.percents[0]).collect();
    let negative_ranks: Vec<f64> = rows.iter().map(|r| r.percents[2]).collect();
    let most_positive = argmax(&positive_ranks).map(|i| &rows[i]);
    let most_negative = argmax(&negative_ranks).map(|i| &rows[i]);

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Aspect \u{00d7} Sentiment".to_string(),
                    caption: "How sentiment splits within each aspect of the Meridian experience".to_string(),
                }
                DateRangePicker {}

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    for (i, sentiment) in Sentiment::ALL.iter().enumerate() {
                        KpiCard {
                            title: format!("{} Overall", sentiment.label()),
                            value: format!("{:.1}%", shares[i]),
                            subtitle: "share of all mentions".to_string(),
                            accent: sentiment.color().to_string(),
                        }
                    }
                }

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 0 0 12px 0;",
                    if let Some(row) = most_positive {
                        KpiCard {
                            title: "Most Positive Aspect".to_string(),
                            value: row.aspect.label().to_string(),
                            subtitle: format!("{:.1}% positive within aspect", row.percents[0]),
                            accent: Sentiment::Positive.color().to_string(),
                        }
                    }
                    if let Some(row) = most_negative {
                        KpiCard {
                            title: "Most Negative Aspect".to_string(),
                            value: row.aspect.label().to_string(),
                            subtitle: format!("{:.1}% negative within aspect", row.percents[2]),
                            accent: Sentiment::Negative.color().to_string(),
                        }
                    }
                }

                div {
                    style: "margin: 8px 0;",
                    label {
                        style: "font-size: 13px; color: #333; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: as_percent(),
                            onchange: move |evt: Event<FormData>| {
                                as_percent.set(evt.checked());
                            },
                        }
                        " Show bars as percent within each aspect"
                    }
                }

                ChartContainer {
                    id: STACKED_CHART_ID.to_string(),
                    empty: no_data,
                    min_height: 360,
                }

                if !rows.is_empty() {
                    BreakdownTable { rows: rows.clone() }
                }
            }
        }
    }
}

/// One formatted table row, precomputed so the markup stays simple.
#[derive(Clone, PartialEq)]
struct RowCells {
    aspect: String,
    positive: String,
    neutral: String,
    negative: String,
    total: String,
    pct_positive: String,
    pct_negative: String,
    share: String,
}

impl RowCells {
    fn from(row: &AspectRow) -> Self {
        RowCells {
            aspect: row.aspect.label().to_string(),
            positive: format!("{}", row.positive as u64),
            neutral: format!("{}", row.neutral as u64),
            negative: format!("{}", row.negative as u64),
            total: format!("{}", row.total as u64),
            pct_positive: format!("{:.1}%", row.percents[0]),
            pct_negative: format!("{:.1}%", row.percents[2]),
            share: format!("{:.1}%", row.share),
        }
    }
}

/// Per-aspect breakdown table with counts, row totals, and row percentages.
#[component]
fn BreakdownTable(rows: Vec<AspectRow>) -> Element {
    let cell = "padding: 6px 10px; border-bottom: 1px solid #E0E0E0; text-align: right;";
    let head = "padding: 6px 10px; border-bottom: 2px solid #BDBDBD; text-align: right; font-size: 12px; color: #555;";
    let cells: Vec<RowCells> = rows.iter().map(RowCells::from).collect();

    rsx! {
        div {
            style: "margin-top: 16px; overflow-x: auto;",
            ChartHeader {
                title: "Breakdown Table".to_string(),
                caption: "Percentages are within each aspect; share is of all mentions".to_string(),
            }
            table {
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        th { style: "{head} text-align: left;", "Aspect" }
                        th { style: "{head}", "Positive" }
                        th { style: "{head}", "Neutral" }
                        th { style: "{head}", "Negative" }
                        th { style: "{head}", "Total" }
                        th { style: "{head}", "% Positive" }
                        th { style: "{head}", "% Negative" }
                        th { style: "{head}", "Share" }
                    }
                }
                tbody {
                    for row in cells.iter() {
                        tr {
                            td { style: "{cell} text-align: left; font-weight: bold;", "{row.aspect}" }
                            td { style: "{cell}", "{row.positive}" }
                            td { style: "{cell}", "{row.neutral}" }
                            td { style: "{cell}", "{row.negative}" }
                            td { style: "{cell}", "{row.total}" }
                            td { style: "{cell} color: #2E7D32;", "{row.pct_positive}" }
                            td { style: "{cell} color: #C62828;", "{row.pct_negative}" }
                            td { style: "{cell}", "{row.share}" }
                        }
                    }
                }
            }
        }
    }
}
