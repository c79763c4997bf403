//! Render request model.
//!
//! A [`RenderRequest`] is everything a backend needs to draw a scan: a camera
//! pose, a light, a background and a flat list of markers. It carries no
//! reference to the galaxy it was built from.

use image::Rgba;
use nalgebra::{Isometry3, Perspective3, Point3, Vector3};

/// Camera pose and projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
    /// Vertical field of view in degrees.
    pub fovy_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    /// The fixed camera used for sector scans.
    #[must_use]
    pub fn sector_view() -> Self {
        Self {
            eye: Point3::new(50.0, 50.0, 0.0),
            target: Point3::origin(),
            up: Vector3::z(),
            fovy_degrees: 60.0,
            near: 1.0,
            far: 100.0,
        }
    }

    /// World-to-view transform. The camera looks down `-z` in view space.
    #[must_use]
    pub fn view(&self) -> Isometry3<f64> {
        Isometry3::look_at_rh(&self.eye, &self.target, &self.up)
    }

    #[must_use]
    pub fn projection(&self, aspect: f64) -> Perspective3<f64> {
        Perspective3::new(aspect, self.fovy_degrees.to_radians(), self.near, self.far)
    }

    /// Pixels per world unit at unit distance, for a raster `height` pixels tall.
    #[must_use]
    pub fn focal_length_px(&self, height: u32) -> f64 {
        (f64::from(height) / 2.0) / (self.fovy_degrees.to_radians() / 2.0).tan()
    }
}

/// Marker geometry template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Flat-shaded cube, used for the reference grid.
    Cube,
    /// Lambert-shaded sphere, used for systems.
    Sphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// Base color; alpha below 255 blends with what is behind.
    pub color: Rgba<u8>,
}

impl Material {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Rgba([r, g, b, a]),
        }
    }
}

/// One object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point3<f64>,
    pub shape: Shape,
    /// Sphere radius or cube half-edge, in world units.
    pub size: f64,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub camera: Camera,
    /// Direction towards the light, in world space.
    pub light: Vector3<f64>,
    pub background: Rgba<u8>,
    pub markers: Vec<Marker>,
    /// Raster width in pixels, supersampling included.
    pub width: u32,
    /// Raster height in pixels, supersampling included.
    pub height: u32,
}

impl RenderRequest {
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
