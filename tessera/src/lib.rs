//! The base `tessera` crate containing all shared components for scattering rotated tiles
//! over a canvas and cutting them out of a photo.

/// Entities describing a canvas and the tiles placed on it
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Owned RGB pixel buffers and the pure operations defined on them
pub mod raster;

/// Importing position lists into and exporting them out of this library, layout previews
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
