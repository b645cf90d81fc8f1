use anyhow::Result;
use clap::Parser;
use gsum::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
