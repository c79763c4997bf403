use anyhow::Context;
use luty_config::LutyConfig;

use crate::cli::GlobalFlags;

/// Read `.env`, then build the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LutyConfig> {
    let config = LutyConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load lutymaps configuration")?;

    tracing::debug!(
        galaxy = %config.galaxy.path.display(),
        accounts = %config.accounts.path.display(),
        sector = %config.scan.sector(),
        "configuration loaded"
    );
    Ok(config)
}
