//! CPU marker rasterizer.
//!
//! Each marker is projected to a screen-space splat: a lambert-shaded disc
//! for spheres, a flat square for cubes. Splats are painted back to front
//! and alpha-blended over the background.

use image::{Rgba, RgbaImage};
use nalgebra::Vector3;

use super::Renderer;
use crate::error::RenderError;
use crate::request::{RenderRequest, Shape};

/// Largest raster the renderer will allocate (1 GiB of RGBA).
pub const MAX_RASTER_PIXELS: u64 = 1 << 28;

const AMBIENT: f64 = 0.25;

#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRenderer;

impl SoftwareRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// A marker in screen space.
#[derive(Debug, Clone, Copy)]
struct Splat {
    x: f64,
    y: f64,
    radius: f64,
    depth: f64,
    shape: Shape,
    color: Rgba<u8>,
}

impl Renderer for SoftwareRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError> {
        let (width, height) = (request.width, request.height);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height });
        }
        if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
            return Err(RenderError::TooLarge {
                width,
                height,
                max: MAX_RASTER_PIXELS,
            });
        }

        let camera = &request.camera;
        let view = camera.view();
        let projection = camera.projection(request.aspect());
        let focal = camera.focal_length_px(height);
        let light = view.rotation * request.light.normalize();
        let (w, h) = (f64::from(width), f64::from(height));

        let mut splats: Vec<Splat> = request
            .markers
            .iter()
            .filter_map(|marker| {
                let eye_space = view * marker.position;
                let depth = -eye_space.z;
                if depth < camera.near || depth > camera.far {
                    return None;
                }

                let ndc = projection.project_point(&eye_space);
                let x = (ndc.x + 1.0) * 0.5 * w;
                let y = (1.0 - ndc.y) * 0.5 * h;
                let radius = marker.size * focal / depth;
                if radius <= 0.0
                    || x + radius < 0.0
                    || y + radius < 0.0
                    || x - radius > w
                    || y - radius > h
                {
                    return None;
                }

                Some(Splat {
                    x,
                    y,
                    radius,
                    depth,
                    shape: marker.shape,
                    color: marker.material.color,
                })
            })
            .collect();

        // Farthest first. The sort is stable, so equal depths keep request order.
        splats.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        tracing::debug!(
            markers = request.markers.len(),
            visible = splats.len(),
            width,
            height,
            "rasterizing"
        );

        let mut raster = RgbaImage::from_pixel(width, height, request.background);
        for splat in &splats {
            draw(&mut raster, splat, &light);
        }
        Ok(raster)
    }
}

fn draw(raster: &mut RgbaImage, splat: &Splat, light: &Vector3<f64>) {
    let (min_x, max_x) = span(splat.x, splat.radius, raster.width());
    let (min_y, max_y) = span(splat.y, splat.radius, raster.height());

    for py in min_y..max_y {
        for px in min_x..max_x {
            // Sample at the pixel center, in units of the splat radius.
            let dx = (f64::from(px) + 0.5 - splat.x) / splat.radius;
            let dy = (f64::from(py) + 0.5 - splat.y) / splat.radius;

            let shade = match splat.shape {
                Shape::Sphere => {
                    let d2 = dx.mul_add(dx, dy * dy);
                    if d2 > 1.0 {
                        continue;
                    }
                    lambert(&Vector3::new(dx, -dy, (1.0 - d2).sqrt()), light)
                }
                Shape::Cube => {
                    if dx.abs() > 1.0 || dy.abs() > 1.0 {
                        continue;
                    }
                    lambert(&Vector3::z(), light)
                }
            };

            blend(raster.get_pixel_mut(px, py), splat.color, shade);
        }
    }
}

/// Pixel range `[lo, hi)` covered by `center ± radius`, clamped to `[0, limit]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn span(center: f64, radius: f64, limit: u32) -> (u32, u32) {
    let limit = f64::from(limit);
    let lo = (center - radius).floor().clamp(0.0, limit);
    let hi = (center + radius).ceil().clamp(0.0, limit);
    (lo as u32, hi as u32)
}

fn lambert(normal: &Vector3<f64>, light: &Vector3<f64>) -> f64 {
    (1.0 - AMBIENT).mul_add(normal.dot(light).max(0.0), AMBIENT)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, shade: f64) {
    let alpha = f64::from(src.0[3]) / 255.0;
    for c in 0..3 {
        let lit = f64::from(src.0[c]) * shade;
        let out = lit.mul_add(alpha, f64::from(dst.0[c]) * (1.0 - alpha));
        dst.0[c] = out.round().clamp(0.0, 255.0) as u8;
    }
    let dst_alpha = f64::from(dst.0[3]) / 255.0;
    let out_alpha = dst_alpha.mul_add(1.0 - alpha, alpha);
    dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}
