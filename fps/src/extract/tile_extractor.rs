use log::debug;
use rayon::prelude::*;
use tessera::entities::{CanvasGeometry, Placement, PositionList};
use tessera::geometry::primitives::{Point, SPolygon};
use tessera::raster::{Mask, RasterImage};
use tessera::util::assertions;

use crate::config::ExtractionConfig;
use crate::error::FpsError;
use crate::extract::ScaleFactor;

/// Cuts rotated tiles out of a photo and turns them upright.
///
/// The photo is padded once on construction; every tile is cut from that padded copy,
/// so the source itself is never modified and tiles can be cut independently of each other.
pub struct TileExtractor {
    padded: RasterImage,
    scale: ScaleFactor,
    config: ExtractionConfig,
    tile_width: usize,
    tile_height: usize,
}

impl TileExtractor {
    pub fn new(
        source: &RasterImage,
        geometry: &CanvasGeometry,
        scale: ScaleFactor,
        config: ExtractionConfig,
    ) -> Result<Self, FpsError> {
        geometry.validate().map_err(FpsError::configuration)?;
        let tile_width = scale.to_pixels(geometry.tile_width);
        let tile_height = scale.to_pixels(geometry.tile_height);
        if !(tile_width >= 1.0 && tile_height >= 1.0) {
            return Err(FpsError::Configuration(format!(
                "a tile of {} x {} scaled by {} is less than a pixel wide or high",
                geometry.tile_width,
                geometry.tile_height,
                scale.value()
            )));
        }
        debug!(
            "[EXTRACT] tiles of {tile_width}x{tile_height} px, scale {:.3}, pad {} px",
            scale.value(),
            config.pad
        );

        Ok(Self {
            padded: source.pad(config.pad, config.fill),
            scale,
            config,
            tile_width: tile_width as usize,
            tile_height: tile_height as usize,
        })
    }

    /// Size of every produced tile, in pixels
    pub fn tile_size(&self) -> (usize, usize) {
        (self.tile_width, self.tile_height)
    }

    pub fn extract_tile(&self, placement: &Placement) -> Result<RasterImage, FpsError> {
        let (tw, th) = self.tile_size();
        let fill = self.config.fill;

        let center = self.pixel_center(placement)?;
        if !self.reaches_padded_photo(center) {
            debug!("[EXTRACT] [{placement}] lies beyond the padded photo, tile is all fill");
            return Ok(RasterImage::new(tw, th, fill));
        }
        let outline = SPolygon::rotated_rectangle(center, tw as f64, th as f64, placement.rotation)
            .map_err(FpsError::configuration)?;

        //keep only what lies inside the outline, cut to its bounding box
        let mask = Mask::rasterize(&outline);
        let region = mask.region();
        let cropped = self
            .padded
            .crop(region, fill)
            .apply_mask(&mask, fill)
            .map_err(FpsError::configuration)?;

        //turn the buffer back upright around the tile center, straight onto a tile sized canvas
        let pivot = Point(center.x() - region.x as f64, center.y() - region.y as f64);
        let tile = cropped.rotate_onto(
            pivot,
            -placement.rotation,
            (tw, th),
            Point(tw as f64 / 2.0, th as f64 / 2.0),
            self.config.interpolation,
            fill,
        );

        debug_assert!(assertions::image_has_dimensions(&tile, tw, th));
        Ok(tile)
    }

    /// Center of the tile in the pixel space of the padded photo.
    ///
    /// Snapped to the pixel grid so that, for multiples of 90°, the tile edges fall on pixel
    /// boundaries: a whole pixel along an axis spanned by an even number of tile pixels,
    /// a pixel center along an axis spanned by an odd number.
    fn pixel_center(&self, placement: &Placement) -> Result<Point, FpsError> {
        let Placement { x, y, rotation } = *placement;
        if !(x.is_finite() && y.is_finite() && rotation.is_finite()) {
            return Err(FpsError::Configuration(format!(
                "placement [{placement}] is not finite"
            )));
        }
        let (tw, th) = self.tile_size();
        //closer to a quarter turn than to upright, the tile width runs along the y-axis
        let quarter_turned = (45.0..135.0).contains(&rotation.rem_euclid(180.0));
        let (span_x, span_y) = match quarter_turned {
            true => (th, tw),
            false => (tw, th),
        };
        let pad = self.config.pad as f64;
        Ok(Point(
            snap(self.scale.apply(x), span_x) + pad,
            snap(self.scale.apply(y), span_y) + pad,
        ))
    }

    /// Whether a tile centered at `center` can cover any pixel of the padded photo
    fn reaches_padded_photo(&self, center: Point) -> bool {
        let (tw, th) = self.tile_size();
        let radius = (tw as f64).hypot(th as f64) / 2.0;
        let (w, h) = self.padded.dimensions();
        center.x() + radius > 0.0
            && center.y() + radius > 0.0
            && center.x() - radius < w as f64
            && center.y() - radius < h as f64
    }

    /// Cuts all tiles in parallel. Tile `i` always belongs to `positions[i]`,
    /// the first failure aborts the whole batch.
    pub fn extract_all(&self, positions: &PositionList) -> Result<Vec<RasterImage>, FpsError> {
        positions
            .as_slice()
            .par_iter()
            .enumerate()
            .map(|(i, placement)| {
                debug!("[EXTRACT] cutting tile {i} at [{placement}]");
                self.extract_tile(placement)
            })
            .collect()
    }
}

fn snap(v: f64, span: usize) -> f64 {
    match span % 2 {
        0 => v.round(),
        _ => (v - 0.5).round() + 0.5,
    }
}
