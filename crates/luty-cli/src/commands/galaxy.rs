use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use luty_config::LutyConfig;
use luty_core::SystemKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GalaxyCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NormalizeResponse {
    input: PathBuf,
    output: PathBuf,
    systems: usize,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    path: PathBuf,
    systems: usize,
    kinds: BTreeMap<&'static str, usize>,
}

/// Handle `lutymaps galaxy`.
pub fn handle(
    action: &GalaxyCommands,
    config: &LutyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GalaxyCommands::Normalize { galaxy, output: dest } => {
            let input = galaxy.as_deref().unwrap_or(config.galaxy.path.as_path());
            let dest = dest.as_deref().unwrap_or(input);
            output(&normalize(input, dest)?, flags.format)
        }
        GalaxyCommands::Stats { galaxy } => {
            let path = galaxy.as_deref().unwrap_or(config.galaxy.path.as_path());
            output(&stats(path)?, flags.format)
        }
    }
}

fn normalize(input: &Path, dest: &Path) -> anyhow::Result<NormalizeResponse> {
    if !input.is_file() {
        bail!("galaxy file {} does not exist", input.display());
    }

    let store = luty_store::load_galaxy_store(input)
        .with_context(|| format!("failed to load galaxy from {}", input.display()))?;
    luty_store::save_galaxy_store(dest, &store)
        .with_context(|| format!("failed to write galaxy to {}", dest.display()))?;

    Ok(NormalizeResponse {
        input: input.to_path_buf(),
        output: dest.to_path_buf(),
        systems: store.len(),
    })
}

fn stats(path: &Path) -> anyhow::Result<StatsResponse> {
    let store = luty_store::load_galaxy_store(path)
        .with_context(|| format!("failed to load galaxy from {}", path.display()))?;

    let counts = store.kind_counts();
    let kinds = SystemKind::ALL
        .into_iter()
        .map(|kind| (kind.label(), counts.get(&kind).copied().unwrap_or(0)))
        .collect();

    Ok(StatsResponse {
        path: path.to_path_buf(),
        systems: store.len(),
        kinds,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const MESSY: &str = r#"{
        "systems": [
            {"kind": "Blue Super Giant", "z": 3, "y": 2, "x": 1},
            {"x": 4, "y": 5, "z": 6, "kind": "Nonexistent Type"}
        ]
    }"#;

    #[test]
    fn normalize_rewrites_canonical_form() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("galaxy.json");
        std::fs::write(&input, MESSY).unwrap();

        let response = normalize(&input, &input).unwrap();
        assert_eq!(response.systems, 2);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&input).unwrap()).unwrap();
        assert_eq!(written["meta"]["version"], 1);
        assert_eq!(written["systems"][0]["kind"], "Blue Super Giant");
        assert_eq!(written["systems"][1]["kind"], SystemKind::Empty.label());
    }

    #[test]
    fn normalize_to_separate_output_leaves_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("galaxy.json");
        let dest = dir.path().join("clean.json");
        std::fs::write(&input, MESSY).unwrap();

        normalize(&input, &dest).unwrap();

        assert_eq!(std::fs::read_to_string(&input).unwrap(), MESSY);
        assert!(dest.is_file());
    }

    #[test]
    fn normalize_requires_existing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.json");
        assert!(normalize(&input, &input).is_err());
        assert!(!input.exists());
    }

    #[test]
    fn stats_counts_every_kind() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("galaxy.json");
        std::fs::write(&input, MESSY).unwrap();

        let response = stats(&input).unwrap();
        assert_eq!(response.systems, 2);
        assert_eq!(response.kinds.len(), SystemKind::ALL.len());
        assert_eq!(response.kinds[SystemKind::BlueSuperGiant.label()], 1);
        assert_eq!(response.kinds[SystemKind::Empty.label()], 1);
        assert_eq!(response.kinds[SystemKind::DenseDustCloud.label()], 0);
    }

    #[test]
    fn stats_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let response = stats(&dir.path().join("absent.json")).unwrap();
        assert_eq!(response.systems, 0);
        assert!(response.kinds.values().all(|&n| n == 0));
    }
}
