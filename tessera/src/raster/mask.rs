use itertools::Itertools;
use ndarray::{Array2, Zip};

use crate::geometry::primitives::SPolygon;
use crate::raster::PixelRegion;

/// Binary coverage of a [`PixelRegion`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    region: PixelRegion,
    /// Indexed as (row, column) relative to the region
    cells: Array2<bool>,
}

impl Mask {
    /// Rasterizes the interior of `polygon` using a scanline fill.
    /// A pixel is covered when its center lies inside the polygon (even-odd rule),
    /// pixel centers on a left edge are inside, on a right edge outside.
    pub fn rasterize(polygon: &SPolygon) -> Self {
        let region = PixelRegion::enclosing(&polygon.bbox);
        let mut cells = Array2::from_elem((region.height, region.width), false);

        for row in 0..region.height {
            let y = (region.y + row as i64) as f64 + 0.5;
            for (x_in, x_out) in polygon.scanline_crossings(y).into_iter().tuples() {
                //columns whose center c satisfies x_in <= c < x_out
                let first = ((x_in - 0.5).ceil() as i64).max(region.x);
                let last = ((x_out - 0.5).ceil() as i64).min(region.x_end());
                for x in first..last {
                    cells[[row, (x - region.x) as usize]] = true;
                }
            }
        }

        Self { region, cells }
    }

    pub fn region(&self) -> PixelRegion {
        self.region
    }

    /// Coverage at column `col` and row `row`, relative to the region
    pub fn get(&self, col: usize, row: usize) -> bool {
        self.cells[[row, col]]
    }

    /// Coverage at an absolute pixel coordinate, `false` outside the region
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (col, row) = (x - self.region.x, y - self.region.y);
        col >= 0
            && row >= 0
            && (col as usize) < self.region.width
            && (row as usize) < self.region.height
            && self.get(col as usize, row as usize)
    }

    /// Number of covered pixels
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Pixels covered by `self` but not by `other`, over the region of `self`
    pub fn subtract(&self, other: &Mask) -> Mask {
        let mut cells = self.cells.clone();
        Zip::indexed(&mut cells).for_each(|(row, col), covered| {
            let (x, y) = (self.region.x + col as i64, self.region.y + row as i64);
            *covered = *covered && !other.contains(x, y);
        });
        Mask {
            region: self.region,
            cells,
        }
    }
}
