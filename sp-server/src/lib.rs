//! Themes service.
//!
//! A small HTTP process that serves the offline-produced themes payload
//! plus generated sample tweets for theme drill-downs. The payload file
//! is read fresh on every request, so replacing it on disk takes effect
//! without a restart.

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use log::info;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod routes;

/// Port used when neither the flag nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;
/// Payload location used when no path is given.
pub const DEFAULT_PAYLOAD_PATH: &str = "fixtures/themes_payload.json";

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub payload_path: PathBuf,
    /// Pinned mock seed; `None` derives one from the clock at startup.
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Resolve the port as flag, then `PORT` env var, then the default.
    pub fn resolve(
        port_flag: Option<u16>,
        payload_path: Option<PathBuf>,
        seed: Option<u64>,
    ) -> ServerConfig {
        let port = port_flag
            .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);
        ServerConfig {
            port,
            payload_path: payload_path.unwrap_or_else(|| PathBuf::from(DEFAULT_PAYLOAD_PATH)),
            seed,
        }
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub payload_path: PathBuf,
    pub seed: u64,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/themes", get(routes::themes))
        .route("/api/themes/{id}/tweets", get(routes::theme_tweets))
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn run(config: ServerConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let state = AppState {
        payload_path: config.payload_path.clone(),
        seed,
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "[SP Debug] themes service listening on {} (payload: {})",
        addr,
        config.payload_path.display()
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_flag() {
        let config = ServerConfig::resolve(Some(8123), None, None);
        assert_eq!(config.port, 8123);
        assert_eq!(
            config.payload_path,
            PathBuf::from("fixtures/themes_payload.json")
        );
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_resolve_defaults() {
        // PORT is not set in the test environment.
        if std::env::var("PORT").is_err() {
            let config = ServerConfig::resolve(None, None, Some(7));
            assert_eq!(config.port, DEFAULT_PORT);
            assert_eq!(config.seed, Some(7));
        }
    }
}
