use luty_config::LutyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &LutyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => commands::scan::handle(&args, config, flags),
        Commands::Galaxy { action } => commands::galaxy::handle(&action, config, flags),
        Commands::Accounts { action } => commands::accounts::handle(&action, config, flags),
    }
}
