//! Foreground themes-service runner.

use sp_server::ServerConfig;
use std::path::PathBuf;

/// Resolve the configuration and serve until terminated.
pub async fn run_serve(
    port: Option<u16>,
    payload: Option<PathBuf>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = ServerConfig::resolve(port, payload, seed);
    sp_server::run(config).await
}
