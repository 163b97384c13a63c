use anyhow::Result;
use clap::Parser;
use tally::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("tally={level}"))
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
