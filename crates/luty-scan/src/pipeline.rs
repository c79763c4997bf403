//! Sector scan orchestration.
//!
//! `scan` is run-to-completion: filter, build the request, render, downsample,
//! encode, write. An absent or empty store is not an error and yields a
//! grid-only image. Any failure after the filter aborts the scan and leaves
//! the output path untouched.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use luty_config::ScanConfig;
use luty_core::{GalaxyStore, Region};
use serde::Serialize;

use crate::error::ScanError;
use crate::render::Renderer;
use crate::scene;

/// Output resolution and supersampling factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    pub width: u32,
    pub height: u32,
    pub supersample: u32,
}

impl ScanSettings {
    /// Dimensions of the raster the renderer draws into.
    #[must_use]
    pub const fn raster_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.supersample),
            self.height.saturating_mul(self.supersample),
        )
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for ScanSettings {
    fn from(config: &ScanConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            supersample: config.supersample,
        }
    }
}

/// Summary of a finished scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Systems inside the region.
    pub selected: usize,
    /// Markers sent to the renderer, grid included.
    pub markers: usize,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: u64,
}

/// Scan pipeline bound to one render backend.
#[derive(Debug, Clone)]
pub struct ScanPipeline<R> {
    renderer: R,
    settings: ScanSettings,
}

impl<R: Renderer> ScanPipeline<R> {
    pub const fn new(renderer: R, settings: ScanSettings) -> Self {
        Self { renderer, settings }
    }

    /// Render the systems of `store` that fall inside `region` to a PNG at `output`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Render`] or [`ScanError::RasterSize`] when the
    /// backend fails, [`ScanError::Encode`] when PNG encoding fails, and
    /// [`ScanError::Write`] when the file cannot be written.
    pub fn scan<G>(
        &self,
        store: Option<&GalaxyStore>,
        region: &G,
        output: &Path,
    ) -> Result<ScanReport, ScanError>
    where
        G: Region + ?Sized,
    {
        let started = Instant::now();

        let selected = store.map(|s| s.filter(region)).unwrap_or_default();
        tracing::debug!(
            total = store.map_or(0, GalaxyStore::len),
            selected = selected.len(),
            "sector filtered"
        );

        let (raster_width, raster_height) = self.settings.raster_size();
        let request = scene::build_request(selected.iter().copied(), raster_width, raster_height);
        let markers = request.markers.len();
        tracing::debug!(
            grid = scene::grid_marker_count(),
            stars = selected.len(),
            elapsed_ms = elapsed_ms(started),
            "scene built"
        );

        let raster = self.renderer.render(&request)?;
        if raster.dimensions() != (raster_width, raster_height) {
            return Err(ScanError::RasterSize {
                expected_width: raster_width,
                expected_height: raster_height,
                actual_width: raster.width(),
                actual_height: raster.height(),
            });
        }
        tracing::debug!(elapsed_ms = elapsed_ms(started), "rendered");

        let image = self.downsample(raster);
        let png = encode_png(&image)?;
        luty_store::codec::write_atomic(output, &png)?;

        let report = ScanReport {
            selected: selected.len(),
            markers,
            output: output.to_path_buf(),
            width: image.width(),
            height: image.height(),
            elapsed_ms: elapsed_ms(started),
        };
        tracing::info!(
            selected = report.selected,
            output = %output.display(),
            elapsed_ms = report.elapsed_ms,
            "scan complete"
        );
        Ok(report)
    }

    fn downsample(&self, raster: RgbaImage) -> RgbaImage {
        if self.settings.supersample <= 1 {
            return raster;
        }
        imageops::resize(
            &raster,
            self.settings.width,
            self.settings.height,
            FilterType::Triangle,
        )
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ScanError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
