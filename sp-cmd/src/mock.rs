//! Seeded sample-record CSV generation.

use chrono::Local;
use log::info;
use sp_core::mock;

/// Generate `count` records under `seed` and write them as a headerless
/// CSV in the record layout the rest of the toolkit parses.
pub fn run_mock_records(count: usize, seed: u64, out: &str) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let records = mock::records(count, seed, today);

    let mut writer = csv::Writer::from_path(out)?;
    for record in &records {
        writer.write_record(record.csv_fields())?;
    }
    writer.flush()?;

    info!("Wrote {} records to {}", records.len(), out);
    Ok(())
}
