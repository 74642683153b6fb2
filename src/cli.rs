use clap::Parser;

/// Memory Master CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a two-column CSV knowledge base (category, comma-separated items)
    #[arg(short = 'i', long = "input")]
    pub knowledge_path: Option<String>,

    /// Require exact (case-insensitive) matches instead of fuzzy matching
    #[arg(long)]
    pub exact: bool,

    /// Seed for the computer player's word choice
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
