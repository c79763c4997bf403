use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use luty_config::LutyConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccountsCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NormalizeResponse {
    input: PathBuf,
    output: PathBuf,
    accounts: usize,
}

/// Handle `lutymaps accounts`.
pub fn handle(
    action: &AccountsCommands,
    config: &LutyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AccountsCommands::Normalize {
            accounts,
            output: dest,
        } => {
            let input = accounts.as_deref().unwrap_or(config.accounts.path.as_path());
            let dest = dest.as_deref().unwrap_or(input);
            output(&normalize(input, dest)?, flags.format)
        }
    }
}

fn normalize(input: &Path, dest: &Path) -> anyhow::Result<NormalizeResponse> {
    if !input.is_file() {
        bail!("accounts file {} does not exist", input.display());
    }

    let store = luty_store::load_account_store(input)
        .with_context(|| format!("failed to load accounts from {}", input.display()))?;
    luty_store::save_account_store(dest, &store)
        .with_context(|| format!("failed to write accounts to {}", dest.display()))?;

    Ok(NormalizeResponse {
        input: input.to_path_buf(),
        output: dest.to_path_buf(),
        accounts: store.len(),
    })
}
