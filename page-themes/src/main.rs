//! Discussion Themes
//!
//! Browses the machine-discovered discussion themes: KPI cards over the
//! payload, a card grid (cleaned name, truncated summary, capped keyword
//! chips, tweet-count badge), and a per-theme drill-down that loads sample
//! tweets from the themes service with an optional text search.
//!
//! The payload is produced by an external pipeline and can be stale,
//! partial, or missing; a payload-level `error` shows up in the banner
//! while the rest of the page keeps rendering whatever arrived.

use dioxus::prelude::*;
use sp_chart_ui::components::{ChartHeader, ErrorDisplay, KpiCard, LoadingSpinner};
use sp_chart_ui::js_bridge;
use sp_chart_ui::state::AppState;
use sp_core::api::ThemesClient;
use sp_core::sentiment::Sentiment;
use sp_core::theme::{Theme, TweetsResponse};
use sp_metrics::themes::{
    average_mentions, display_name, display_summary, max_mentions, top_theme, total_mentions,
    visible_keywords, TWEET_TEXT_LIMIT,
};
use sp_utils::dates::normalize_day;
use sp_utils::text::truncate_chars;

/// Number of sample tweets loaded per drill-down.
const DRILLDOWN_LIMIT: usize = 10;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("themes-root"))
        .launch(App);
}

/// Themes client rooted at the page origin.
fn themes_client() -> anyhow::Result<ThemesClient> {
    ThemesClient::new(&js_bridge::page_origin())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut themes: Signal<Vec<Theme>> = use_signal(Vec::new);
    let mut updated_at: Signal<String> = use_signal(String::new);
    let mut selected: Signal<Option<u32>> = use_signal(|| None);
    let mut tweets: Signal<Option<TweetsResponse>> = use_signal(|| None);
    let mut tweet_query: Signal<String> = use_signal(String::new);

    // ─── Effect 1: Fetch the themes payload once on mount ───
    use_effect(move || {
        spawn(async move {
            let client = match themes_client() {
                Ok(client) => client,
                Err(e) => {
                    state.error_msg.set(Some(format!("Client setup failed: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            match client.themes().await {
                Ok(payload) => {
                    updated_at.set(normalize_day(Some(&payload.updated_at)));
                    themes.set(payload.themes);
                    // A payload-level error (e.g. missing file upstream)
                    // surfaces in the banner without hiding the page.
                    state.error_msg.set(payload.error);
                }
                Err(e) => {
                    log::error!("Themes fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Could not reach the themes service: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: Fetch sample tweets for the selected theme ───
    use_effect(move || {
        let Some(theme_id) = selected() else {
            return;
        };
        let query = tweet_query();

        let token = state.begin_request();
        spawn(async move {
            let client = match themes_client() {
                Ok(client) => client,
                Err(e) => {
                    state.error_msg.set(Some(format!("Client setup failed: {}", e)));
                    return;
                }
            };

            let q = if query.is_empty() {
                None
            } else {
                Some(query.as_str())
            };
            match client.theme_tweets(theme_id, DRILLDOWN_LIMIT, q).await {
                Ok(response) if state.is_current(token) => tweets.set(Some(response)),
                Ok(_) => {}
                Err(e) if state.is_current(token) => {
                    log::error!("Tweet fetch failed for theme {}: {}", theme_id, e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load sample tweets: {}", e)));
                }
                Err(_) => {}
            }
        });
    });

    // ─── Render ───
    let theme_list = themes();
    let updated = updated_at();
    let selected_name = selected().and_then(|id| {
        theme_list
            .iter()
            .find(|t| t.id == id)
            .map(|t| display_name(t))
    });

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
                    title: "Discussion Themes".to_string(),
                    caption: if updated.is_empty() {
                        "Recurring topics discovered in Meridian mentions".to_string()
                    } else {
                        format!("Recurring topics discovered in Meridian mentions \u{00b7} updated {}", updated)
                    },
                }

                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    KpiCard {
                        title: "Themes".to_string(),
                        value: format!("{}", theme_list.len()),
                    }
                    KpiCard {
                        title: "Total Tweets".to_string(),
                        value: format!("{}", total_mentions(&theme_list)),
                        subtitle: "across all themes".to_string(),
                    }
                    KpiCard {
                        title: "Avg. per Theme".to_string(),
                        value: format!("{}", average_mentions(&theme_list)),
                    }
                    if let Some(top) = top_theme(&theme_list) {
                        KpiCard {
                            title: "Largest Theme".to_string(),
                            value: display_name(top),
                            subtitle: format!("{} tweets", max_mentions(&theme_list)),
                        }
                    }
                }

                if theme_list.is_empty() {
                    p {
                        style: "padding: 24px; text-align: center; color: #666;",
                        "No themes available yet. The discovery pipeline has not published a payload."
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 12px;",
                        for theme in theme_list.iter() {
                            ThemeCard {
                                theme: theme.clone(),
                                selected: selected() == Some(theme.id),
                                on_select: move |id: u32| {
                                    selected.set(Some(id));
                                    tweet_query.set(String::new());
                                    tweets.set(None);
                                },
                            }
                        }
                    }
                }

                if let Some(name) = selected_name {
                    TweetPanel {
                        theme_name: name,
                        tweets: tweets(),
                        query: tweet_query(),
                        on_query: move |q: String| tweet_query.set(q),
                        on_close: move |_| {
                            selected.set(None);
                            tweets.set(None);
                        },
                    }
                }
            }
        }
    }
}

/// One theme card in the grid.
#[component]
fn ThemeCard(theme: Theme, selected: bool, on_select: EventHandler<u32>) -> Element {
    let name = display_name(&theme);
    let summary = display_summary(&theme);
    let keywords = theme.keywords.clone().unwrap_or_default();
    let (shown, more) = visible_keywords(&keywords);
    let shown: Vec<String> = shown.to_vec();
    let theme_id = theme.id;
    let border = if selected { "#1565C0" } else { "#E0E0E0" };

    rsx! {
        div {
            style: "padding: 14px; background: #fff; border: 1px solid {border}; border-radius: 6px; cursor: pointer;",
            onclick: move |_| on_select.call(theme_id),

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; gap: 8px;",
                h4 { style: "margin: 0; font-size: 15px;", "{name}" }
                span {
                    style: "background: #E3F2FD; color: #1565C0; font-size: 12px; padding: 2px 8px; border-radius: 10px; white-space: nowrap;",
                    "{theme.tweet_count} tweets"
                }
            }
            p {
                style: "margin: 8px 0; font-size: 13px; color: #555;",
                "{summary}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                for keyword in shown.iter() {
                    span {
                        style: "background: #F5F5F5; font-size: 11px; padding: 2px 6px; border-radius: 4px; color: #666;",
                        "{keyword}"
                    }
                }
                if let Some(marker) = more {
                    span {
                        style: "font-size: 11px; padding: 2px 6px; color: #999;",
                        "{marker}"
                    }
                }
            }
        }
    }
}

/// Drill-down panel listing sample tweets for the selected theme.
#[component]
fn TweetPanel(
    theme_name: String,
    tweets: Option<TweetsResponse>,
    query: String,
    on_query: EventHandler<String>,
    on_close: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; padding: 14px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 6px;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h4 { style: "margin: 0; font-size: 15px;", "Sample tweets \u{00b7} {theme_name}" }
                button {
                    style: "background: none; border: none; font-size: 16px; cursor: pointer; color: #666;",
                    onclick: move |evt| on_close.call(evt),
                    "\u{00d7}"
                }
            }

            input {
                r#type: "search",
                placeholder: "Search within these tweets...",
                value: "{query}",
                style: "width: 100%; max-width: 360px; padding: 6px 10px; margin-bottom: 10px; border: 1px solid #CCC; border-radius: 4px;",
                onchange: move |evt: Event<FormData>| on_query.call(evt.value()),
            }

            match tweets {
                None => rsx! {
                    p { style: "color: #666; font-size: 13px;", "Loading sample tweets..." }
                },
                Some(response) if response.items.is_empty() => rsx! {
                    p { style: "color: #666; font-size: 13px;", "No tweets match this search." }
                },
                Some(response) => rsx! {
                    for item in response.items.iter() {
                        TweetItem { tweet: item.clone() }
                    }
                    p {
                        style: "margin: 8px 0 0 0; font-size: 11px; color: #999;",
                        "{response.note}"
                    }
                },
            }
        }
    }
}

/// A single tweet row with sentiment badge, text, date, and link.
#[component]
fn TweetItem(tweet: sp_core::theme::ThemeTweet) -> Element {
    let color = Sentiment::parse(&tweet.sentiment_label)
        .map(|s| s.color())
        .unwrap_or("#888");
    let label = Sentiment::parse(&tweet.sentiment_label)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| tweet.sentiment_label.clone());
    let text = truncate_chars(tweet.display_text(), TWEET_TEXT_LIMIT);
    let score = format!("{:+.2}", tweet.sentiment_score);

    rsx! {
        div {
            style: "padding: 10px 0; border-bottom: 1px solid #EEE;",
            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 4px;",
                span {
                    style: "color: {color}; font-weight: bold; font-size: 12px;",
                    "{label}"
                }
                span { style: "font-size: 12px; color: #999;", "{score}" }
                span { style: "font-size: 12px; color: #999;", "{tweet.date}" }
            }
            p { style: "margin: 0 0 4px 0; font-size: 13px; color: #333;", "{text}" }
            a {
                href: "{tweet.twitterurl}",
                target: "_blank",
                style: "font-size: 12px; color: #1565C0;",
                "View post"
            }
        }
    }
}
