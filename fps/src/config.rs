use serde::{Deserialize, Serialize};

use tessera::entities::CanvasGeometry;
use tessera::io::preview::PreviewOptions;
use tessera::io::svg::SvgDrawOptions;
use tessera::raster::{Color, Interpolation};

use crate::error::FpsError;

/// Distance between neighbouring candidates of the placement search, in canvas units
pub const DEFAULT_SAMPLING_STRIDE: f64 = 10.0;

/// Configuration for the FPS optimizer and the tile extraction
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FPSConfig {
    /// Size of the canvas and nominal size of a tile
    pub geometry: CanvasGeometry,
    /// Number of tiles to place
    pub n_placements: usize,
    /// Distance between neighbouring candidates of the search grid, in canvas units
    pub sampling_stride: f64,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Configuration of the tile extraction
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub preview: PreviewOptions,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

/// Configuration of the tile extraction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ExtractionConfig {
    /// Border added around the source photo before any tile is cut, in pixels
    pub pad: usize,
    /// Color of the border and of everything outside a tile
    pub fill: Color,
    /// Resampling used when a tile is rotated upright
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pad: 500,
            fill: Color::BLACK,
            interpolation: Interpolation::Bilinear,
        }
    }
}

impl FPSConfig {
    pub fn validate(&self) -> Result<(), FpsError> {
        self.geometry.validate().map_err(FpsError::configuration)?;
        if !(self.sampling_stride.is_finite() && self.sampling_stride > 0.0) {
            return Err(FpsError::Configuration(format!(
                "sampling stride must be strictly positive, got {}",
                self.sampling_stride
            )));
        }
        Ok(())
    }
}

impl Default for FPSConfig {
    fn default() -> Self {
        Self {
            geometry: CanvasGeometry::default(),
            n_placements: 25,
            sampling_stride: DEFAULT_SAMPLING_STRIDE,
            prng_seed: Some(0),
            extraction: ExtractionConfig::default(),
            preview: PreviewOptions::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
