//! Sentiment Analysis
//!
//! Deep-dive into the sentiment mix: a three-series daily trend line chart,
//! a distribution donut, KPI cards, and threshold-based insight callouts.
//!
//! Data flow:
//! 1. On mount: fetch `GET /` for dataset bounds and default the window to
//!    the full span.
//! 2. On window change: fetch the summary and trend under one generation
//!    token; stale responses are discarded.
//! 3. Data signals drive the two D3.js charts via `js_bridge`.

use dioxus::prelude::*;
use sp_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, KpiCard, LoadingSpinner,
};
use sp_chart_ui::js_bridge;
use sp_chart_ui::state::AppState;
use sp_core::analytics::{SentimentSummary, TrendResponse};
use sp_core::api::AnalyticsClient;
use sp_core::sentiment::Sentiment;
use sp_metrics::stats::{sentiment_insight, SentimentBreakdown};

/// DOM id for the trend chart container.
const TREND_CHART_ID: &str = "sentiment-trend-chart";
/// DOM id for the distribution donut container.
const DONUT_CHART_ID: &str = "sentiment-donut-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sentiment-root"))
        .launch(App);
}

/// Analytics client rooted at the page origin's `/api` prefix.
fn analytics_client() -> anyhow::Result<AnalyticsClient> {
    AnalyticsClient::new(&format!("{}/api", js_bridge::page_origin()))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut summary: Signal<Option<SentimentSummary>> = use_signal(|| None);
    let mut trend: Signal<Option<TrendResponse>> = use_signal(|| None);

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

    // ─── Effect 2: Fetch summary and trend whenever the window changes ───
    use_effect(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();
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

            let fetched_summary = client.sentiment_summary(&start, &end).await;
            let fetched_trend = client.sentiment_trend(&start, &end).await;

            if !state.is_current(token) {
                return;
            }

            match (fetched_summary, fetched_trend) {
                (Ok(s), Ok(t)) => {
                    summary.set(Some(s));
                    trend.set(Some(t));
                    state.error_msg.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Sentiment fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load sentiment data: {}", e)));
                }
            }
        });
    });

    // ─── Effect 3: Render the trend chart ───
    use_effect(move || {
        let Some(response) = trend() else {
            return;
        };
        if response.trend.is_empty() {
            js_bridge::destroy_chart(TREND_CHART_ID);
            return;
        }

        let rows: Vec<serde_json::Value> = response
            .trend
            .iter()
            .map(|point| {
                serde_json::json!({
                    "date": point.date,
                    "positive": point.positive,
                    "neutral": point.neutral,
                    "negative": point.negative,
                })
            })
            .collect();

        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::json!({
            "height": 340,
            "yLabel": "Mentions per day",
        })
        .to_string();

        js_bridge::render_trend_chart(TREND_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 4: Render the distribution donut ───
    use_effect(move || {
        let Some(s) = summary() else {
            return;
        };
        let counts = s.ordered_counts();
        if counts.iter().sum::<u64>() == 0 {
            js_bridge::destroy_chart(DONUT_CHART_ID);
            return;
        }

        let slices: Vec<serde_json::Value> = Sentiment::ALL
            .iter()
            .zip(counts.iter())
            .map(|(sentiment, count)| {
                serde_json::json!({
                    "label": sentiment.label(),
                    "value": count,
                    "color": sentiment.color(),
                })
            })
            .collect();

        let data_json = serde_json::to_string(&slices).unwrap_or_default();
        let config_json = serde_json::json!({
            "height": 300,
            "centerLabel": format!("{} posts", s.total),
        })
        .to_string();

        js_bridge::render_donut_chart(DONUT_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let summary_view = summary();
    let (counts, percents) = match &summary_view {
        Some(s) => (s.ordered_counts(), s.ordered_percent()),
        None => ([0u64; 3], [0f64; 3]),
    };
    let insight = summary_view
        .as_ref()
        .map(|s| sentiment_insight(&SentimentBreakdown::new(s.ordered_counts())));
    let no_data = counts.iter().sum::<u64>() == 0;
    let trend_empty = trend().map(|t| t.trend.is_empty()).unwrap_or(false);

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
                    title: "Sentiment Analysis".to_string(),
                    caption: "How posts about Meridian split into positive, neutral, and negative".to_string(),
                }
                DateRangePicker {}

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    for (i, sentiment) in Sentiment::ALL.iter().enumerate() {
                        KpiCard {
                            title: sentiment.label().to_string(),
                            value: format!("{:.1}%", percents[i]),
                            subtitle: format!("{} mentions", counts[i]),
                            accent: sentiment.color().to_string(),
                        }
                    }
                }

                if let Some(text) = insight {
                    p {
                        style: "margin: 4px 0 12px 0; padding: 10px 14px; background: #F5F7FA; border-left: 4px solid #1565C0; font-size: 14px; color: #333;",
                        "{text}"
                    }
                }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start;",
                    div {
                        style: "flex: 2; min-width: 420px;",
                        ChartHeader { title: "Daily Trend".to_string() }
                        ChartContainer {
                            id: TREND_CHART_ID.to_string(),
                            empty: trend_empty,
                            min_height: 360,
                        }
                    }
                    div {
                        style: "flex: 1; min-width: 280px;",
                        ChartHeader { title: "Distribution".to_string() }
                        ChartContainer {
                            id: DONUT_CHART_ID.to_string(),
                            empty: no_data,
                            min_height: 320,
                        }
                    }
                }
            }
        }
    }
}
