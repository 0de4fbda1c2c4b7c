//! Social Pulse CLI - themes service, sample data, and analytics probing.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sp-cli",
    version,
    about = "Social Pulse dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sp_cmd::run(cli.command).await
}
