//! Raw Data Browser
//!
//! A paginated table over a seeded sample of individual records: free-text
//! search, sentiment and aspect filters, and dataset stats cards.
//!
//! The stats cards always describe the full range-scoped set, not the
//! filtered subset, so narrowing the search never changes the headline
//! numbers. Filtering and pagination run through the reducer in
//! `sp_metrics::browse`; this page only renders snapshots.

use chrono::Local;
use dioxus::prelude::*;
use sp_chart_ui::components::{
    ChartHeader, DateRangePicker, ErrorDisplay, FilterSelect, KpiCard, LoadingSpinner,
};
use sp_chart_ui::state::AppState;
use sp_core::aspect::Aspect;
use sp_core::mock;
use sp_core::record::TweetRecord;
use sp_core::sentiment::Sentiment;
use sp_metrics::browse::{filter_records, paginate, reduce, BrowseAction, BrowseState, PAGE_SIZE};
use sp_metrics::stats::{average_score, SentimentBreakdown};
use wasm_bindgen::JsValue;

/// Fixed seed so a reload shows the same sample set.
const DATA_SEED: u64 = 0x5EED;
/// Number of sample records generated for the browser.
const RECORD_COUNT: usize = 100;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("raw-data-root"))
        .launch(App);
}

/// Dropdown options for the sentiment filter, "all" first.
fn sentiment_options() -> Vec<(String, String)> {
    let mut options = vec![("all".to_string(), "All sentiments".to_string())];
    for sentiment in Sentiment::ALL {
        options.push((sentiment.as_str().to_string(), sentiment.label().to_string()));
    }
    options
}

/// Dropdown options for the aspect filter, "all" first.
fn aspect_options() -> Vec<(String, String)> {
    let mut options = vec![("all".to_string(), "All aspects".to_string())];
    for aspect in Aspect::ALL {
        options.push((aspect.as_str().to_string(), aspect.label().to_string()));
    }
    options
}

/// One formatted table row, precomputed so the markup stays simple.
#[derive(Clone, PartialEq)]
struct RecordCells {
    date: String,
    user: String,
    text: String,
    sentiment: String,
    sentiment_color: &'static str,
    score: String,
    aspect: String,
    engagement: String,
    url: String,
}

impl RecordCells {
    fn from(record: &TweetRecord) -> Self {
        RecordCells {
            date: record.created_at.clone(),
            user: format!("@{}", record.user),
            text: record.text.clone(),
            sentiment: record.sentiment_label.label().to_string(),
            sentiment_color: record.sentiment_label.color(),
            score: format!("{:+.2}", record.sentiment_score),
            aspect: record.aspect_dominant.label().to_string(),
            engagement: format!("{} RT / {} likes", record.retweets, record.likes),
            url: record.twitterurl.clone(),
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut all_records: Signal<Vec<TweetRecord>> = use_signal(Vec::new);
    let mut browse: Signal<BrowseState> = use_signal(BrowseState::default);

    // ─── Effect 1: Generate the sample set once on mount ───
    use_effect(move || {
        let today = Local::now().date_naive();
        let data = mock::records(RECORD_COUNT, DATA_SEED, today);
        log::info!("[SP Debug] page-raw-data: generated {} sample records", data.len());

        let min = data
            .iter()
            .map(|r| r.created_at.as_str())
            .min()
            .unwrap_or_default()
            .to_string();
        let max = data
            .iter()
            .map(|r| r.created_at.as_str())
            .max()
            .unwrap_or_default()
            .to_string();

        all_records.set(data);
        state.min_date.set(min.clone());
        state.max_date.set(max.clone());
        state.start_date.set(min);
        state.end_date.set(max);
        state.loading.set(false);
    });

    // ─── Effect 2: Snap back to page 1 when the window moves ───
    use_effect(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();
        if start.is_empty() || end.is_empty() {
            return;
        }

        let in_range = all_records
            .peek()
            .iter()
            .filter(|r| r.created_at >= start && r.created_at <= end)
            .count();
        web_sys::console::log_1(&JsValue::from(format!(
            "[SP Debug] page-raw-data: {} of {} records in range",
            in_range,
            all_records.peek().len()
        )));

        let current = browse.peek().clone();
        browse.set(reduce(&current, BrowseAction::SetPage(1)));
    });

    // ─── Render ───
    let records = all_records();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let scoped: Vec<TweetRecord> = if start.is_empty() || end.is_empty() {
        records.clone()
    } else {
        records
            .iter()
            .filter(|r| r.created_at >= start && r.created_at <= end)
            .cloned()
            .collect()
    };

    // Stats always come from the range-scoped set, before search/filters.
    let breakdown = SentimentBreakdown::from_records(&scoped);
    let dominant = breakdown.dominant();
    let avg = average_score(&scoped);

    let browse_state = browse();
    let filtered = filter_records(&scoped, &browse_state);
    let view = paginate(filtered.len(), browse_state.page, PAGE_SIZE);
    let page_rows: Vec<RecordCells> = filtered[view.start..view.end]
        .iter()
        .map(|r| RecordCells::from(r))
        .collect();

    let matching = filtered.len();
    let page = browse_state.page;
    let total_pages = view.total_pages;
    let selected_sentiment = browse_state
        .sentiment
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| "all".to_string());
    let selected_aspect = browse_state
        .aspect
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| "all".to_string());

    let cell = "padding: 6px 10px; border-bottom: 1px solid #E0E0E0; vertical-align: top;";
    let head = "padding: 6px 10px; border-bottom: 2px solid #BDBDBD; text-align: left; font-size: 12px; color: #555;";

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

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
                    title: "Raw Data Browser".to_string(),
                    caption: "A seeded sample of individual Meridian mentions".to_string(),
                }
                DateRangePicker {}

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    KpiCard {
                        title: "Records in Range".to_string(),
                        value: format!("{}", breakdown.total()),
                        subtitle: format!("of {} in the sample", records.len()),
                    }
                    KpiCard {
                        title: "Dominant Sentiment".to_string(),
                        value: dominant.label().to_string(),
                        subtitle: format!("{:.1}% of range", breakdown.percent(dominant)),
                        accent: dominant.color().to_string(),
                    }
                    KpiCard {
                        title: "Positive Share".to_string(),
                        value: format!("{:.1}%", breakdown.percent(Sentiment::Positive)),
                        subtitle: format!("{} records", breakdown.count(Sentiment::Positive)),
                        accent: Sentiment::Positive.color().to_string(),
                    }
                    KpiCard {
                        title: "Average Score".to_string(),
                        value: format!("{:+.2}", avg),
                        subtitle: "range from -1 to +1".to_string(),
                    }
                }

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center; margin: 8px 0;",
                    input {
                        r#type: "search",
                        placeholder: "Search text...",
                        value: "{browse_state.query}",
                        style: "padding: 6px 10px; border: 1px solid #CCC; border-radius: 4px; min-width: 220px;",
                        oninput: move |evt: Event<FormData>| {
                            let current = browse.peek().clone();
                            browse.set(reduce(&current, BrowseAction::SetQuery(evt.value())));
                        },
                    }
                    FilterSelect {
                        label: "Sentiment:".to_string(),
                        id: "sentiment-filter".to_string(),
                        options: sentiment_options(),
                        selected: selected_sentiment,
                        on_change: move |value: String| {
                            let sentiment = if value == "all" { None } else { Sentiment::parse(&value) };
                            let current = browse.peek().clone();
                            browse.set(reduce(&current, BrowseAction::SetSentiment(sentiment)));
                        },
                    }
                    FilterSelect {
                        label: "Aspect:".to_string(),
                        id: "aspect-filter".to_string(),
                        options: aspect_options(),
                        selected: selected_aspect,
                        on_change: move |value: String| {
                            let aspect = if value == "all" { None } else { Aspect::parse(&value) };
                            let current = browse.peek().clone();
                            browse.set(reduce(&current, BrowseAction::SetAspect(aspect)));
                        },
                    }
                    button {
                        style: "padding: 6px 12px; border: 1px solid #CCC; border-radius: 4px; background: #fff; cursor: pointer;",
                        onclick: move |_| {
                            let current = browse.peek().clone();
                            browse.set(reduce(&current, BrowseAction::ClearFilters));
                        },
                        "Clear Filters"
                    }
                }

                p {
                    style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "{matching} matching records"
                }

                if page_rows.is_empty() {
                    p {
                        style: "padding: 24px; text-align: center; color: #666;",
                        "No records match the current filters."
                    }
                } else {
                    div {
                        style: "overflow-x: auto;",
                        table {
                            style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                            thead {
                                tr {
                                    th { style: "{head}", "Date" }
                                    th { style: "{head}", "User" }
                                    th { style: "{head}", "Text" }
                                    th { style: "{head}", "Sentiment" }
                                    th { style: "{head}", "Score" }
                                    th { style: "{head}", "Aspect" }
                                    th { style: "{head}", "Engagement" }
                                    th { style: "{head}", "Link" }
                                }
                            }
                            tbody {
                                for row in page_rows.iter() {
                                    tr {
                                        td { style: "{cell} white-space: nowrap;", "{row.date}" }
                                        td { style: "{cell} white-space: nowrap;", "{row.user}" }
                                        td { style: "{cell} max-width: 420px;", "{row.text}" }
                                        td { style: "{cell} color: {row.sentiment_color}; font-weight: bold;", "{row.sentiment}" }
                                        td { style: "{cell}", "{row.score}" }
                                        td { style: "{cell}", "{row.aspect}" }
                                        td { style: "{cell} white-space: nowrap;", "{row.engagement}" }
                                        td {
                                            style: "{cell}",
                                            a {
                                                href: "{row.url}",
                                                target: "_blank",
                                                style: "color: #1565C0;",
                                                "View"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        style: "display: flex; gap: 12px; align-items: center; justify-content: center; margin: 12px 0;",
                        button {
                            style: "padding: 6px 12px; border: 1px solid #CCC; border-radius: 4px; background: #fff; cursor: pointer;",
                            disabled: page <= 1,
                            onclick: move |_| {
                                let current = browse.peek().clone();
                                let previous = current.page.saturating_sub(1);
                                browse.set(reduce(&current, BrowseAction::SetPage(previous)));
                            },
                            "\u{2190} Prev"
                        }
                        span {
                            style: "font-size: 13px; color: #333;",
                            "Page {page} of {total_pages}"
                        }
                        button {
                            style: "padding: 6px 12px; border: 1px solid #CCC; border-radius: 4px; background: #fff; cursor: pointer;",
                            disabled: page >= total_pages,
                            onclick: move |_| {
                                let current = browse.peek().clone();
                                let next = current.page + 1;
                                browse.set(reduce(&current, BrowseAction::SetPage(next)));
                            },
                            "Next \u{2192}"
                        }
                    }
                }
            }
        }
    }
}
