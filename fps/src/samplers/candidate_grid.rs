use itertools::Itertools;
use tessera::geometry::primitives::{Point, Rect};

use crate::error::FpsError;

/// Regular grid of candidate points strictly inside a rectangle.
///
/// The candidates are `(x_min + i * stride, y_min + j * stride)` for all `i, j >= 1` that fall strictly
/// inside the rectangle, stored in row-major order: all candidates of the top row from left to right,
/// then the next row, and so on.
#[derive(Clone, Debug)]
pub struct CandidateGrid {
    candidates: Vec<Point>,
    pub n_rows: usize,
    pub n_cols: usize,
    pub stride: f64,
}

impl CandidateGrid {
    pub fn new(bbox: Rect, stride: f64) -> Result<Self, FpsError> {
        if !(stride.is_finite() && stride > 0.0) {
            return Err(FpsError::Configuration(format!(
                "sampling stride must be strictly positive, got {stride}"
            )));
        }
        //multiples instead of accumulation, so no rounding drift builds up along a row
        let axis = |min: f64, max: f64| {
            (1..)
                .map(|i| min + i as f64 * stride)
                .take_while(|v| *v < max)
                .collect_vec()
        };
        let cols = axis(bbox.x_min, bbox.x_max);
        let rows = axis(bbox.y_min, bbox.y_max);

        let candidates = rows
            .iter()
            .flat_map(|y| cols.iter().map(move |x| Point(*x, *y)))
            .collect_vec();

        if candidates.is_empty() {
            return Err(FpsError::DegenerateCanvas {
                width: bbox.width(),
                height: bbox.height(),
                stride,
            });
        }

        Ok(Self {
            candidates,
            n_rows: rows.len(),
            n_cols: cols.len(),
            stride,
        })
    }

    /// All candidates in scan order
    pub fn candidates(&self) -> &[Point] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
