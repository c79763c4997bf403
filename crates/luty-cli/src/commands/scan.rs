use std::path::PathBuf;

use anyhow::Context;
use luty_config::{LutyConfig, ScanConfig};
use luty_scan::{ScanPipeline, ScanReport, ScanSettings, SoftwareRenderer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::output::output;

/// Handle `lutymaps scan`.
pub fn handle(args: &ScanArgs, config: &LutyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (galaxy, scan) = resolve(args, config);
    let report = run(&galaxy, &scan)?;
    output(&report, flags.format)
}

/// Layer command-line overrides on top of configuration.
fn resolve(args: &ScanArgs, config: &LutyConfig) -> (PathBuf, ScanConfig) {
    let galaxy = args
        .galaxy
        .clone()
        .unwrap_or_else(|| config.galaxy.path.clone());

    let mut scan = config.scan.clone();
    if let Some(output) = &args.output {
        scan.output.clone_from(output);
    }
    if let Some(radius) = args.radius {
        scan.radius = radius;
    }
    if let Some(center) = args.center {
        scan.center = center;
    }
    (galaxy, scan)
}

fn run(galaxy: &std::path::Path, scan: &ScanConfig) -> anyhow::Result<ScanReport> {
    let store = luty_store::load_galaxy_store(galaxy)
        .with_context(|| format!("failed to load galaxy from {}", galaxy.display()))?;

    let sector = scan.sector();
    let pipeline = ScanPipeline::new(SoftwareRenderer::new(), ScanSettings::from(scan));
    pipeline
        .scan(Some(&store), &sector, &scan.output)
        .with_context(|| format!("scan of {sector} failed"))
}
