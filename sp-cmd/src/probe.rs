//! Live-aggregate probe against a running analytics service.
//!
//! Useful when wiring up a deployment: prints exactly what the dashboard
//! pages would receive for a window, straight from the wire types.

use log::info;
use sp_core::api::AnalyticsClient;

/// Fetch every aggregate for the window and print them as pretty JSON.
///
/// An omitted bound defaults to the dataset edge reported by the meta
/// endpoint, so a bare probe covers the full dataset.
pub async fn run_probe(
    base_url: &str,
    start: Option<String>,
    end: Option<String>,
) -> anyhow::Result<()> {
    let client = AnalyticsClient::new(base_url)?;

    let meta = client.meta().await?;
    println!("meta: {}", serde_json::to_string_pretty(&meta)?);

    let start = start.unwrap_or_else(|| meta.date_range.min.clone());
    let end = end.unwrap_or_else(|| meta.date_range.max.clone());
    info!("Probing {} from {} to {}", base_url, start, end);

    let summary = client.sentiment_summary(&start, &end).await?;
    println!(
        "sentiment/summary: {}",
        serde_json::to_string_pretty(&summary)?
    );

    let trend = client.sentiment_trend(&start, &end).await?;
    println!("sentiment/trend: {} points", trend.trend.len());

    let aspects = client.aspect_summary(&start, &end, false).await?;
    println!(
        "aspects/summary: {}",
        serde_json::to_string_pretty(&aspects)?
    );

    let scores = client.avg_scores(&start, &end).await?;
    println!(
        "aspects/avg-scores: {}",
        serde_json::to_string_pretty(&scores)?
    );

    let split = client.sentiment_split(&start, &end, false).await?;
    println!(
        "aspects/sentiment-split: {}",
        serde_json::to_string_pretty(&split)?
    );

    Ok(())
}
