//! Social Pulse Overview
//!
//! Landing page of the dashboard: headline KPI cards for mention volume and
//! the sentiment mix, a compact daily trend chart, and a one-line reading of
//! the overall mood in the selected window.
//!
//! Data flow:
//! 1. On mount: fetch `GET /` from the analytics service for the dataset
//!    size and date coverage, default the window to the full span, and
//!    initialize the D3.js chart scripts.
//! 2. On window change: fetch the sentiment summary and trend. Each logical
//!    fetch carries a generation token so a slow, superseded response is
//!    discarded instead of overwriting newer data.
//! 3. Data signals feed the D3.js render via `js_bridge`.

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

/// DOM id for the compact trend chart container.
const TREND_CHART_ID: &str = "overview-trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("overview-root"))
        .launch(App);
}

/// Analytics client rooted at the page origin's `/api` prefix.
fn analytics_client() -> anyhow::Result<AnalyticsClient> {
    AnalyticsClient::new(&format!("{}/api", js_bridge::page_origin()))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut total_rows: Signal<u64> = use_signal(|| 0);
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
                    total_rows.set(meta.total_rows);
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

            // A newer window was requested while this one was in flight.
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
                    log::error!("Overview fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load overview data: {}", e)));
                }
            }
        });
    });

    // ─── Effect 3: Render the trend chart from the trend signal ───
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
            "height": 260,
            "yLabel": "Mentions",
        })
        .to_string();

        js_bridge::render_trend_chart(TREND_CHART_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let summary_view = summary();
    let (counts, percents) = match &summary_view {
        Some(s) => (s.ordered_counts(), s.ordered_percent()),
        None => ([0u64; 3], [0f64; 3]),
    };
    let window_total: u64 = counts.iter().sum();
    let insight = summary_view
        .as_ref()
        .map(|s| sentiment_insight(&SentimentBreakdown::new(s.ordered_counts())));
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
                    title: "Social Pulse Overview".to_string(),
                    caption: "Mention volume and sentiment mix for the Meridian brand".to_string(),
                }
                DateRangePicker {}

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    KpiCard {
                        title: "Total Mentions".to_string(),
                        value: format!("{}", window_total),
                        subtitle: format!("of {} tracked overall", total_rows()),
                    }
                    KpiCard {
                        title: "Positive".to_string(),
                        value: format!("{:.1}%", percents[0]),
                        subtitle: format!("{} mentions", counts[0]),
                        accent: Sentiment::Positive.color().to_string(),
                    }
                    KpiCard {
                        title: "Neutral".to_string(),
                        value: format!("{:.1}%", percents[1]),
                        subtitle: format!("{} mentions", counts[1]),
                        accent: Sentiment::Neutral.color().to_string(),
                    }
                    KpiCard {
                        title: "Negative".to_string(),
                        value: format!("{:.1}%", percents[2]),
                        subtitle: format!("{} mentions", counts[2]),
                        accent: Sentiment::Negative.color().to_string(),
                    }
                }

                if let Some(text) = insight {
                    p {
                        style: "margin: 4px 0 12px 0; padding: 10px 14px; background: #F5F7FA; border-left: 4px solid #1565C0; font-size: 14px; color: #333;",
                        "{text}"
                    }
                }

                ChartContainer {
                    id: TREND_CHART_ID.to_string(),
                    loading: *state.loading.read(),
                    empty: trend_empty,
                    min_height: 280,
                }
                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "Daily mention counts by sentiment for the selected window."
                }
            }
        }
    }
}
