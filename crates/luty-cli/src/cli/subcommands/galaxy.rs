use std::path::PathBuf;

use clap::Subcommand;

/// Galaxy file maintenance.
#[derive(Clone, Debug, Subcommand)]
pub enum GalaxyCommands {
    /// Rewrite a galaxy file in canonical form.
    Normalize {
        /// Galaxy file to read (defaults to configuration).
        #[arg(long)]
        galaxy: Option<PathBuf>,
        /// Destination (defaults to rewriting the input in place).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count systems by kind.
    Stats {
        /// Galaxy file to read (defaults to configuration).
        #[arg(long)]
        galaxy: Option<PathBuf>,
    },
}
