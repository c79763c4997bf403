use std::path::PathBuf;

use clap::Subcommand;

/// Account file maintenance.
#[derive(Clone, Debug, Subcommand)]
pub enum AccountsCommands {
    /// Rewrite an accounts file sorted by id, roles sorted.
    Normalize {
        /// Accounts file to read (defaults to configuration).
        #[arg(long)]
        accounts: Option<PathBuf>,
        /// Destination (defaults to rewriting the input in place).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
