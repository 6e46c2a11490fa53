//! CLI command definitions.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Path to a YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Listen address, overriding the configuration file
        #[arg(long)]
        listen: Option<String>,
    },
    /// Print one page of an organization's repositories
    List {
        /// Organization or user login (prompted for when omitted)
        #[arg(long)]
        org: Option<String>,
        /// Phrase to match against repository names
        #[arg(long)]
        phrase: Option<String>,
        /// Page to print
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Path to a YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
