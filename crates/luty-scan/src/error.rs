//! Scan and render error types.

use thiserror::Error;

use luty_store::StoreError;

/// Failure inside a render backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested raster has a zero dimension.
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// The requested raster is larger than the backend will allocate.
    #[error("Raster {width}x{height} exceeds {max} pixels")]
    TooLarge { width: u32, height: u32, max: u64 },

    /// Backend-specific failure.
    #[error("Render backend failed: {0}")]
    Backend(String),
}

/// Failure of a sector scan. Every variant is fatal to the scan; nothing is
/// retried and no partial image is left behind.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// The backend returned a raster of the wrong size.
    #[error("Renderer returned {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    RasterSize {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write scan: {0}")]
    Write(#[from] StoreError),
}
