mod scale_factor;
mod tile_extractor;

use tessera::entities::{CanvasGeometry, PositionList};
use tessera::raster::RasterImage;

use crate::config::ExtractionConfig;
use crate::error::FpsError;

#[doc(inline)]
pub use scale_factor::ScaleFactor;
#[doc(inline)]
pub use tile_extractor::TileExtractor;

/// Cuts one upright tile out of `source` for every placement, in the order of `positions`.
pub fn extract(
    source: &RasterImage,
    positions: &PositionList,
    geometry: &CanvasGeometry,
    scale: ScaleFactor,
    config: ExtractionConfig,
) -> Result<Vec<RasterImage>, FpsError> {
    TileExtractor::new(source, geometry, scale, config)?.extract_all(positions)
}
