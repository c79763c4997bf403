use std::path::PathBuf;

use clap::{Args, Subcommand};
use luty_core::Sector;

use crate::cli::subcommands::{AccountsCommands, GalaxyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render a sector of the galaxy to a PNG.
    Scan(ScanArgs),
    /// Galaxy data file maintenance.
    Galaxy {
        #[command(subcommand)]
        action: GalaxyCommands,
    },
    /// Account data file maintenance.
    Accounts {
        #[command(subcommand)]
        action: AccountsCommands,
    },
}

/// Arguments for `lutymaps scan`. Unset values fall back to configuration.
#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Galaxy file to scan.
    #[arg(long)]
    pub galaxy: Option<PathBuf>,
    /// PNG file to write.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Sector half-width.
    #[arg(short, long)]
    pub radius: Option<u32>,
    /// Sector center as `x,y,z`.
    #[arg(long, value_parser = Sector::parse_center, allow_hyphen_values = true)]
    pub center: Option<[i64; 3]>,
}
