use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Update severity counts in a project CSV from the Snyk API
    Update {
        /// Path to the CSV file to update in place
        #[arg(short, long)]
        path: String,
        /// Snyk API token; falls back to the SNYK_TOKEN environment variable
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
