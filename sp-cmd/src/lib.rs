//! Command implementations for the Social Pulse CLI.
//!
//! Provides subcommands for running the themes service, generating seeded
//! sample data, summarizing records CSVs, and probing a running analytics
//! service.

use clap::Subcommand;
use std::path::PathBuf;

pub mod mock;
pub mod probe;
pub mod serve;
pub mod stats;

#[derive(Subcommand)]
pub enum Command {
    /// Run the themes service in the foreground
    Serve {
        /// Port to bind; the PORT env var is used when omitted
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the themes payload JSON
        #[arg(long)]
        payload: Option<PathBuf>,

        /// Pin the mock tweet generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a seeded CSV of sample records
    MockRecords {
        /// Number of records to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Generator seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Output CSV path
        #[arg(short, long)]
        out: String,
    },

    /// Print a sentiment and aspect breakdown of a records CSV
    Stats {
        /// Input records CSV path
        #[arg(short, long)]
        input: String,

        /// Only count records on or after this day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Only count records on or before this day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Fetch aggregates from a running analytics service and print them as JSON
    Probe {
        /// Analytics API base URL
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,

        /// Window start (YYYY-MM-DD); defaults to the dataset minimum
        #[arg(long)]
        start: Option<String>,

        /// Window end (YYYY-MM-DD); defaults to the dataset maximum
        #[arg(long)]
        end: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            port,
            payload,
            seed,
        } => serve::run_serve(port, payload, seed).await,
        Command::MockRecords { count, seed, out } => mock::run_mock_records(count, seed, &out),
        Command::Stats { input, start, end } => {
            stats::run_stats(&input, start.as_deref(), end.as_deref())
        }
        Command::Probe {
            base_url,
            start,
            end,
        } => probe::run_probe(&base_url, start, end).await,
    }
}
