//! Render backends.
//!
//! The pipeline only sees the [`Renderer`] trait. [`SoftwareRenderer`] is the
//! bundled backend; anything else that can turn a [`RenderRequest`] into an
//! RGBA raster can stand in for it.

mod software;

pub use software::SoftwareRenderer;

use image::RgbaImage;

use crate::error::RenderError;
use crate::request::RenderRequest;

/// Synchronous render capability.
pub trait Renderer {
    /// Draw `request` into a raster of exactly `request.width × request.height`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the backend cannot produce the raster.
    fn render(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError> {
        (**self).render(request)
    }
}
