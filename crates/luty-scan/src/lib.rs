//! # luty-scan
//!
//! Sector scans for lutymaps: select the systems inside a [`Region`], build a
//! scene of markers around them and render it to a PNG.
//!
//! - [`request`] is the backend-neutral scene description
//! - [`scene`] builds requests from galaxy data (reference grid plus stars)
//! - [`render`] holds the [`Renderer`] trait and the [`SoftwareRenderer`]
//! - [`pipeline`] ties it together and writes the image
//!
//! ```no_run
//! use std::path::Path;
//!
//! use luty_core::{GalaxyStore, Sector};
//! use luty_scan::{ScanPipeline, ScanSettings, SoftwareRenderer};
//!
//! let store = GalaxyStore::new();
//! let pipeline = ScanPipeline::new(SoftwareRenderer, ScanSettings::default());
//! let report = pipeline
//!     .scan(Some(&store), &Sector::around_origin(50), Path::new("scan.png"))
//!     .expect("scan");
//! println!("{} systems selected", report.selected);
//! ```
//!
//! [`Region`]: luty_core::Region

pub mod error;
pub mod pipeline;
pub mod render;
pub mod request;
pub mod scene;

pub use error::{RenderError, ScanError};
pub use pipeline::{ScanPipeline, ScanReport, ScanSettings};
pub use render::{Renderer, SoftwareRenderer};
pub use request::{Camera, Marker, Material, RenderRequest, Shape};
