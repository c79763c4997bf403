//! Scene construction for a sector scan.
//!
//! The scene is a fixed reference grid of small cubes plus one sphere per
//! selected system. Grid markers come first, then systems in selection order.

use image::Rgba;
use luty_core::{System, SystemKind};
use nalgebra::{Point3, Vector3};

use crate::request::{Camera, Marker, Material, RenderRequest, Shape};

/// Grid coordinates run from `-GRID_EXTENT` to `GRID_EXTENT` on every axis.
pub const GRID_EXTENT: i32 = 30;
pub const GRID_STEP: usize = 10;
/// Grid coordinates are spread by this factor in world space.
pub const GRID_SCALE: f64 = 4.0;
pub const GRID_MARKER_SIZE: f64 = 0.2;
pub const GRID_MATERIAL: Material = Material::rgb(0x46, 0x89, 0x66);

pub const STAR_MARKER_SIZE: f64 = 0.4;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0xFF]);

/// Number of markers in the reference grid.
#[must_use]
pub fn grid_marker_count() -> usize {
    let per_axis = (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_STEP).count();
    per_axis.pow(3)
}

/// Material for a system kind.
#[must_use]
pub const fn material_for(kind: SystemKind) -> Material {
    match kind {
        SystemKind::BlueSuperGiant => Material::rgb(0x9D, 0xB4, 0xFF),
        SystemKind::YellowMainSequence => Material::rgb(0xFF, 0xF4, 0xA8),
        SystemKind::DenseDustCloud => Material::rgba(0x8C, 0x6B, 0x4F, 0xC0),
        SystemKind::MediumDustCloud => Material::rgba(0xB8, 0x9A, 0x7A, 0x99),
        SystemKind::Empty => Material::rgba(0x9D, 0xFF, 0xFF, 0xBF),
    }
}

/// Light direction shared by every scan.
#[must_use]
pub fn light_direction() -> Vector3<f64> {
    Vector3::new(0.75, 0.5, 1.0).normalize()
}

/// The data-independent reference grid.
#[must_use]
pub fn reference_grid() -> Vec<Marker> {
    let axis: Vec<i32> = (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_STEP).collect();
    let mut markers = Vec::with_capacity(axis.len().pow(3));
    for &x in &axis {
        for &y in &axis {
            for &z in &axis {
                markers.push(Marker {
                    position: Point3::new(f64::from(x), f64::from(y), f64::from(z)) * GRID_SCALE,
                    shape: Shape::Cube,
                    size: GRID_MARKER_SIZE,
                    material: GRID_MATERIAL,
                });
            }
        }
    }
    markers
}

/// One sphere per system, in the order given.
pub fn system_markers<'a, I>(systems: I) -> Vec<Marker>
where
    I: IntoIterator<Item = &'a System>,
{
    systems
        .into_iter()
        .map(|system| {
            let [x, y, z] = system.position();
            Marker {
                position: Point3::new(x, y, z),
                shape: Shape::Sphere,
                size: STAR_MARKER_SIZE,
                material: material_for(system.kind),
            }
        })
        .collect()
}

/// Assemble the full request for a raster of `width × height` pixels.
pub fn build_request<'a, I>(systems: I, width: u32, height: u32) -> RenderRequest
where
    I: IntoIterator<Item = &'a System>,
{
    let mut markers = reference_grid();
    markers.extend(system_markers(systems));

    RenderRequest {
        camera: Camera::sector_view(),
        light: light_direction(),
        background: BACKGROUND,
        markers,
        width,
        height,
    }
}
