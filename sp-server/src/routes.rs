//! Request handlers for the themes service.

use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use sp_core::mock;
use sp_core::theme::{ThemesPayload, TweetsResponse};

const DEFAULT_TWEET_LIMIT: usize = 10;
const MAX_TWEET_LIMIT: usize = 50;
const MOCK_NOTE: &str = "This is mock data for demonstration purposes";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Default, Deserialize)]
pub struct TweetsQuery {
    pub limit: Option<usize>,
    pub q: Option<String>,
}

/// Clamp the requested limit into [1, 50], defaulting to 10 when absent.
/// An explicit 0 clamps up to 1 rather than falling back to the default.
fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_TWEET_LIMIT).clamp(1, MAX_TWEET_LIMIT)
}

/// Read the payload file fresh.
///
/// A missing file is part of normal operation (the offline pipeline may
/// not have run yet) and yields an empty payload with an explanatory
/// error field; an unreadable or unparsable file is a real fault.
fn load_payload(path: &std::path::Path) -> Result<ThemesPayload, String> {
    if !path.exists() {
        return Ok(ThemesPayload {
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            themes: Vec::new(),
            error: Some("Themes payload file not found".to_string()),
        });
    }
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read themes payload: {}", e))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse themes payload: {}", e))
}

/// Build the drill-down response: generate up to `limit` tweets, then
/// apply the optional text filter. The filter runs after generation, so
/// `count` can come back smaller than the requested limit.
fn tweets_response(
    theme_id: u32,
    raw_limit: Option<usize>,
    q: Option<&str>,
    seed: u64,
    today: NaiveDate,
) -> TweetsResponse {
    let limit = clamp_limit(raw_limit);
    let items = mock::theme_tweets(theme_id, limit, seed, today);
    let items: Vec<_> = match q.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => items.into_iter().filter(|t| t.matches_query(q)).collect(),
        None => items,
    };
    TweetsResponse {
        theme: theme_id,
        count: items.len(),
        items,
        note: MOCK_NOTE.to_string(),
    }
}

pub async fn themes(State(state): State<AppState>) -> Result<Json<ThemesPayload>, ApiError> {
    match load_payload(&state.payload_path) {
        Ok(payload) => {
            info!(
                "[SP Debug] GET /api/themes -> {} themes{}",
                payload.themes.len(),
                if payload.error.is_some() {
                    " (payload missing)"
                } else {
                    ""
                }
            );
            Ok(Json(payload))
        }
        Err(error) => {
            warn!("[SP Debug] GET /api/themes failed: {}", error);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })))
        }
    }
}

pub async fn theme_tweets(
    State(state): State<AppState>,
    Path(theme_id): Path<u32>,
    Query(query): Query<TweetsQuery>,
) -> Json<TweetsResponse> {
    let today = Local::now().date_naive();
    let response = tweets_response(
        theme_id,
        query.limit,
        query.q.as_deref(),
        state.seed,
        today,
    );
    info!(
        "[SP Debug] GET /api/themes/{}/tweets -> {} items",
        theme_id, response.count
    );
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn temp_payload_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sp-server-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(None), 10);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(1)), 1);
        assert_eq!(clamp_limit(Some(25)), 25);
        assert_eq!(clamp_limit(Some(50)), 50);
        assert_eq!(clamp_limit(Some(5000)), 50);
    }

    #[test]
    fn test_load_payload_missing_file_is_soft() {
        let payload = load_payload(std::path::Path::new("/nonexistent/sp/payload.json")).unwrap();
        assert!(payload.themes.is_empty());
        assert_eq!(
            payload.error.as_deref(),
            Some("Themes payload file not found")
        );
        assert!(!payload.updated_at.is_empty());
    }

    #[test]
    fn test_load_payload_reads_valid_file() {
        let path = temp_payload_path("valid");
        std::fs::write(
            &path,
            r#"{"updated_at": "2024-06-01T00:00:00Z", "themes": [{"id": 2, "name": "Pricing", "tweet_count": 44}]}"#,
        )
        .unwrap();
        let payload = load_payload(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(payload.error.is_none());
        assert_eq!(payload.themes.len(), 1);
        assert_eq!(payload.themes[0].tweet_count, 44);
    }

    #[test]
    fn test_load_payload_invalid_json_is_hard_error() {
        let path = temp_payload_path("invalid");
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_payload(&path);
        std::fs::remove_file(&path).ok();
        let error = result.unwrap_err();
        assert!(error.contains("parse"));
    }

    #[test]
    fn test_tweets_response_echoes_theme_and_note() {
        let response = tweets_response(4, None, None, 99, today());
        assert_eq!(response.theme, 4);
        assert_eq!(response.count, 10);
        assert_eq!(response.items.len(), 10);
        assert_eq!(response.note, MOCK_NOTE);
    }

    #[test]
    fn test_tweets_response_filter_runs_after_generation() {
        let unfiltered = tweets_response(0, Some(50), None, 1234, today());
        let filtered = tweets_response(0, Some(50), Some("customer service"), 1234, today());
        assert!(filtered.count <= unfiltered.count);
        assert!(filtered.count < 50);
        for item in &filtered.items {
            assert!(item.text.to_lowercase().contains("customer service"));
        }
        // Filtered items are a subsequence of the unfiltered generation.
        let ids: Vec<&str> = unfiltered.items.iter().map(|t| t.id.as_str()).collect();
        for item in &filtered.items {
            assert!(ids.contains(&item.id.as_str()));
        }
    }

    #[test]
    fn test_tweets_response_blank_query_ignored() {
        let a = tweets_response(2, Some(5), Some("   "), 7, today());
        let b = tweets_response(2, Some(5), None, 7, today());
        assert_eq!(a.count, b.count);
    }

    #[test]
    fn test_tweets_response_deterministic_for_seed() {
        let a = tweets_response(3, Some(20), None, 42, today());
        let b = tweets_response(3, Some(20), None, 42, today());
        assert_eq!(a.count, b.count);
        for (x, y) in a.items.iter().zip(b.items.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.text, y.text);
        }
    }
}
