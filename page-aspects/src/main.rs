//! Aspect Analysis
//!
//! Which parts of the Meridian experience people talk about: a mention-count
//! bar chart with a percent-of-total toggle, and an average-sentiment-score
//! bar chart per aspect (scores live in [-1, 1], so bars can go negative).
//!
//! The percent toggle refetches rather than rescaling locally, so the
//! displayed shares always come from the service's own denominator.

use dioxus::prelude::*;
use sp_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, KpiCard, LoadingSpinner,
};
use sp_chart_ui::js_bridge;
use sp_chart_ui::state::AppState;
use sp_core::analytics::{AspectSummary, AvgScores};
use sp_core::api::AnalyticsClient;
use sp_core::aspect::Aspect;
use sp_metrics::stats::{argmax, argmin};

/// DOM id for the mention-count bar chart.
const MENTIONS_CHART_ID: &str = "aspect-mentions-chart";
/// DOM id for the average-score bar chart.
const SCORES_CHART_ID: &str = "aspect-scores-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aspects-root"))
        .launch(App);
}

/// Analytics client rooted at the page origin's `/api` prefix.
fn analytics_client() -> anyhow::Result<AnalyticsClient> {
    AnalyticsClient::new(&format!("{}/api", js_bridge::page_origin()))
}

/// Percent shares per aspect in display order, read from the summary's
/// `percent` map. Absent aspects count as zero.
fn ordered_percents(summary: &AspectSummary) -> [f64; 5] {
    let mut out = [0f64; 5];
    for (i, aspect) in Aspect::ALL.iter().enumerate() {
        out[i] = summary.percent.get(aspect.as_str()).copied().unwrap_or(0.0);
    }
    out
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut summary: Signal<Option<AspectSummary>> = use_signal(|| None);
    let mut scores: Signal<Option<AvgScores>> = use_signal(|| None);
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

    // ─── Effect 2: Fetch summary and scores on window or toggle change ───
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

            let fetched_summary = client.aspect_summary(&start, &end, percent).await;
            let fetched_scores = client.avg_scores(&start, &end).await;

            if !state.is_current(token) {
                return;
            }

            match (fetched_summary, fetched_scores) {
                (Ok(s), Ok(avg)) => {
                    summary.set(Some(s));
                    scores.set(Some(avg));
                    state.error_msg.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Aspect fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load aspect data: {}", e)));
                }
            }
        });
    });

    // ─── Effect 3: Render the mention-count bar chart ───
    use_effect(move || {
        let Some(s) = summary() else {
            return;
        };
        let values = s.values();
        if values.iter().all(|v| *v == 0.0) {
            js_bridge::destroy_chart(MENTIONS_CHART_ID);
            return;
        }

        let percent = as_percent();
        let bars: Vec<serde_json::Value> = Aspect::ALL
            .iter()
            .zip(values.iter())
            .map(|(aspect, value)| {
                serde_json::json!({
                    "label": aspect.label(),
                    "value": value,
                })
            })
            .collect();

        let data_json = serde_json::to_string(&bars).unwrap_or_default();
        let config_json = serde_json::json!({
            "height": 320,
            "yLabel": if percent { "% of mentions" } else { "Mentions" },
            "valueSuffix": if percent { "%" } else { "" },
            "color": "#1565C0",
        })
        .to_string();

        js_bridge::render_bar_chart(MENTIONS_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 4: Render the average-score bar chart ───
    use_effect(move || {
        let Some(avg) = scores() else {
            return;
        };
        if avg.avg_scores.is_empty() {
            js_bridge::destroy_chart(SCORES_CHART_ID);
            return;
        }

        // Bars colored by sign so a net-negative aspect stands out.
        let bars: Vec<serde_json::Value> = Aspect::ALL
            .iter()
            .map(|aspect| {
                let score = avg.score_for(*aspect);
                serde_json::json!({
                    "label": aspect.label(),
                    "value": score,
                    "color": if score < 0.0 { "#C62828" } else { "#2E7D32" },
                })
            })
            .collect();

        let data_json = serde_json::to_string(&bars).unwrap_or_default();
        let config_json = serde_json::json!({
            "height": 320,
            "yLabel": "Average sentiment score",
        })
        .to_string();

        js_bridge::render_bar_chart(SCORES_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let summary_view = summary();
    let total = summary_view.as_ref().map(|s| s.total).unwrap_or(0.0);
    let no_mentions = summary_view
        .as_ref()
        .map(|s| s.values().iter().all(|v| *v == 0.0))
        .unwrap_or(false);
    let top_aspect = summary_view.as_ref().and_then(|s| {
        let percents = ordered_percents(s);
        argmax(&percents).map(|i| (Aspect::ALL[i], percents[i]))
    });

    let scores_view = scores();
    let score_values: Vec<f64> = match &scores_view {
        Some(avg) => Aspect::ALL.iter().map(|a| avg.score_for(*a)).collect(),
        None => Vec::new(),
    };
    let best = argmax(&score_values).map(|i| (Aspect::ALL[i], score_values[i]));
    let worst = argmin(&score_values).map(|i| (Aspect::ALL[i], score_values[i]));
    let no_scores = scores_view
        .as_ref()
        .map(|avg| avg.avg_scores.is_empty())
        .unwrap_or(false);

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
                    title: "Aspect Analysis".to_string(),
                    caption: "Which parts of the experience people mention, and how they feel about each".to_string(),
                }
                DateRangePicker {}

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    KpiCard {
                        title: "Total Mentions".to_string(),
                        value: format!("{}", total as u64),
                    }
                    if let Some((aspect, percent)) = top_aspect {
                        KpiCard {
                            title: "Top Aspect".to_string(),
                            value: aspect.label().to_string(),
                            subtitle: format!("{:.1}% of mentions", percent),
                        }
                    }
                    if let Some((aspect, score)) = best {
                        KpiCard {
                            title: "Highest Avg. Score".to_string(),
                            value: format!("{:+.2}", score),
                            subtitle: aspect.label().to_string(),
                            accent: "#2E7D32".to_string(),
                        }
                    }
                    if let Some((aspect, score)) = worst {
                        KpiCard {
                            title: "Lowest Avg. Score".to_string(),
                            value: format!("{:+.2}", score),
                            subtitle: aspect.label().to_string(),
                            accent: "#C62828".to_string(),
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
                        " Show mentions as percent of total"
                    }
                }

                ChartHeader { title: "Mentions by Aspect".to_string() }
                ChartContainer {
                    id: MENTIONS_CHART_ID.to_string(),
                    empty: no_mentions,
                    min_height: 340,
                }

                ChartHeader {
                    title: "Average Sentiment Score by Aspect".to_string(),
                    caption: "Scores range from -1 (negative) to +1 (positive)".to_string(),
                }
                ChartContainer {
                    id: SCORES_CHART_ID.to_string(),
                    empty: no_scores,
                    min_height: 340,
                }
            }
        }
    }
}
