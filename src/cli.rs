use crate::config::OutputFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gsum")]
#[command(about = "Git history analysis tool for contributor and keyword reports")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Report {
        #[arg(long, value_enum, help = "Override the configured output format")]
        format: Option<OutputFormat>,

        #[arg(long, help = "Override the configured report destination")]
        output: Option<PathBuf>,
    },
    Top {
        #[arg(long, default_value_t = 3, help = "Number of authors to show")]
        limit: usize,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Search {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Keywords to match against commit subjects")]
        keywords: Vec<String>,
    },
    Authors {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Report { format, output } => {
                crate::report::exec(self.common, format, output)
            }
            Commands::Top { limit, json } => crate::top::exec(self.common, limit, json),
            Commands::Search { json, keywords } => {
                crate::search::exec(self.common, keywords, json)
            }
            Commands::Authors { json } => crate::authors::exec(self.common, json),
        }
    }
}
