use serde::{Deserialize, Serialize};

use crate::geometry::Transformation;
use crate::geometry::primitives::Point;
use crate::raster::{Color, RasterImage};

/// How pixel values are reconstructed at non-integer positions during a warp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Value of the pixel whose area contains the sample position
    Nearest,
    /// Weighted mean of the four pixels around the sample position
    #[default]
    Bilinear,
}

impl RasterImage {
    /// Rotates the content of the image by `rotation` degrees around `pivot` and resamples it
    /// onto a new image of `width` x `height` pixels, in which `pivot` lands on `target`.
    /// Positions that map outside of `self` take the `fill` color.
    ///
    /// Pixel (x, y) covers the square [x, x+1) x [y, y+1), so its center is at (x + 0.5, y + 0.5).
    /// This warp resamples and is therefore lossy unless `rotation` is a multiple of 90°,
    /// [`Interpolation::Nearest`] is used and output pixel centers map onto source pixel centers.
    pub fn rotate_onto(
        &self,
        pivot: Point,
        rotation: f64,
        (width, height): (usize, usize),
        target: Point,
        interpolation: Interpolation,
        fill: Color,
    ) -> RasterImage {
        //maps source onto destination, sampling needs the way back
        let forward = Transformation::from_translation((-pivot.x(), -pivot.y()))
            .rotate(rotation.to_radians())
            .translate(target.into());
        let backward = forward.inverse();

        let mut rotated = RasterImage::new(width, height, fill);
        for y in 0..height {
            for x in 0..width {
                let (sx, sy) = backward.apply(x as f64 + 0.5, y as f64 + 0.5);
                let color = match interpolation {
                    Interpolation::Nearest => self.sample_nearest(sx, sy, fill),
                    Interpolation::Bilinear => self.sample_bilinear(sx, sy, fill),
                };
                rotated.put_pixel(x, y, color);
            }
        }
        rotated
    }

    fn sample_nearest(&self, x: f64, y: f64, fill: Color) -> Color {
        self.pixel_or(x.floor() as i64, y.floor() as i64, fill)
    }

    fn sample_bilinear(&self, x: f64, y: f64, fill: Color) -> Color {
        //shift so the neighbouring pixel centers sit on integer coordinates
        let (fx, fy) = (x - 0.5, y - 0.5);
        let (x0, y0) = (fx.floor(), fy.floor());
        let (tx, ty) = (fx - x0, fy - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);

        let neighbours = [
            (self.pixel_or(x0, y0, fill), (1.0 - tx) * (1.0 - ty)),
            (self.pixel_or(x0 + 1, y0, fill), tx * (1.0 - ty)),
            (self.pixel_or(x0, y0 + 1, fill), (1.0 - tx) * ty),
            (self.pixel_or(x0 + 1, y0 + 1, fill), tx * ty),
        ];

        let mut blended = [0.0f64; 3];
        for (color, weight) in neighbours {
            for (acc, v) in blended.iter_mut().zip(color.channels()) {
                *acc += weight * v as f64;
            }
        }
        Color::from(blended.map(|v| v.round().clamp(0.0, 255.0) as u8))
    }
}
