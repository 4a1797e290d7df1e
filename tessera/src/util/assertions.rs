//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use crate::entities::{CanvasGeometry, PositionList};
use crate::raster::RasterImage;

/// Every placement has finite coordinates and a rotation in [0, 180)
pub fn positions_are_generated(positions: &PositionList) -> bool {
    positions.iter().all(|p| {
        p.x.is_finite() && p.y.is_finite() && (0.0..180.0).contains(&p.rotation)
    })
}

/// Every placement has its center on the canvas (borders included)
pub fn positions_within_canvas(positions: &PositionList, geometry: &CanvasGeometry) -> bool {
    let bbox = geometry.bbox();
    positions.centers().all(|c| bbox.collides_with(&c))
}

pub fn image_has_dimensions(image: &RasterImage, width: usize, height: usize) -> bool {
    image.dimensions() == (width, height)
}
