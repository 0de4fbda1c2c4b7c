//! Sentiment and aspect breakdown of a records CSV.

use anyhow::bail;
use log::info;
use sp_core::aspect::Aspect;
use sp_core::date_range::DateRange;
use sp_core::record::TweetRecord;
use sp_core::sentiment::Sentiment;
use sp_metrics::stats::{average_score, percentage, SentimentBreakdown};
use sp_utils::dates::parse_date;

/// Read a records CSV, optionally restrict it to a date window, and print
/// the sentiment and aspect breakdown.
pub fn run_stats(input: &str, start: Option<&str>, end: Option<&str>) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(input)?;
    let mut records = TweetRecord::parse_csv(&data);
    info!("Parsed {} records from {}", records.len(), input);

    let range = match (start, end) {
        (Some(start), Some(end)) => Some(DateRange::from_strs(start, end)?),
        (None, None) => None,
        _ => bail!("--start and --end must be given together"),
    };
    if let Some(range) = range {
        records.retain(|record| {
            parse_date(&record.created_at)
                .map(|day| range.contains(day))
                .unwrap_or(false)
        });
        info!(
            "{} records between {} and {}",
            records.len(),
            range.0,
            range.1
        );
    }

    let breakdown = SentimentBreakdown::from_records(&records);
    let percents = breakdown.percents();
    let total = records.len();

    println!("Records: {}", total);
    println!("Sentiment:");
    for (i, sentiment) in Sentiment::ALL.iter().enumerate() {
        println!(
            "  {:<9} {:>6}  {:>5.1}%",
            sentiment.label(),
            breakdown.counts[i],
            percents[i]
        );
    }
    println!("Average score: {:+.3}", average_score(&records));

    println!("Aspects:");
    for aspect in Aspect::ALL {
        let count = records
            .iter()
            .filter(|r| r.aspect_dominant == aspect)
            .count();
        println!(
            "  {:<9} {:>6}  {:>5.1}%",
            aspect.label(),
            count,
            percentage(count as f64, total as f64)
        );
    }

    Ok(())
}
