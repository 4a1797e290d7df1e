use anyhow::{Context, Result, ensure};
use ndarray::{Array3, s};

use crate::geometry::primitives::Rect;
use crate::raster::{Color, Mask};

/// Number of channels per pixel (RGB)
pub const CHANNELS: usize = 3;

//tolerance used when snapping real coordinates onto the pixel grid
const GRID_SNAP: f64 = 1e-9;

/// Integer rectangle on a pixel grid, may extend beyond the bounds of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRegion {
    /// Column of the left-most pixel
    pub x: i64,
    /// Row of the top-most pixel
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl PixelRegion {
    /// Smallest region containing `rect`.
    /// Coordinates within a tiny tolerance of a grid line are treated as lying on it,
    /// so rounding noise in rotated corners does not grow the region by a pixel.
    pub fn enclosing(rect: &Rect) -> Self {
        let x_min = (rect.x_min + GRID_SNAP).floor() as i64;
        let y_min = (rect.y_min + GRID_SNAP).floor() as i64;
        let x_max = (rect.x_max - GRID_SNAP).ceil() as i64;
        let y_max = (rect.y_max - GRID_SNAP).ceil() as i64;
        PixelRegion {
            x: x_min,
            y: y_min,
            width: (x_max - x_min).max(0) as usize,
            height: (y_max - y_min).max(0) as usize,
        }
    }

    /// Column just past the right-most pixel
    pub fn x_end(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Row just past the bottom-most pixel
    pub fn y_end(&self) -> i64 {
        self.y + self.height as i64
    }
}

/// Owned RGB image, stored row-major as (row, column, channel).
///
/// All operations leave `self` untouched and return a freshly allocated image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pixels: Array3<u8>,
}

impl RasterImage {
    /// Image of `width` x `height` pixels, all set to `fill`
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        let fill = fill.channels();
        let pixels = Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| fill[c]);
        Self { pixels }
    }

    /// Wraps an interleaved RGB buffer (row-major, 3 bytes per pixel)
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let pixels = Array3::from_shape_vec((height, width, CHANNELS), data)
            .with_context(|| format!("pixel buffer does not describe a {width}x{height} RGB image"))?;
        Ok(Self { pixels })
    }

    /// Interleaved RGB buffer, row-major
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }

    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        Color(
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
        )
    }

    /// Pixel at (`x`, `y`), or `fill` when the coordinate lies outside the image
    pub fn pixel_or(&self, x: i64, y: i64, fill: Color) -> Color {
        match self.in_bounds(x, y) {
            true => self.pixel(x as usize, y as usize),
            false => fill,
        }
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        for (c, v) in color.channels().into_iter().enumerate() {
            self.pixels[[y, x, c]] = v;
        }
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Surrounds the image with a border of `margin` pixels on all four sides
    pub fn pad(&self, margin: usize, fill: Color) -> RasterImage {
        let (w, h) = self.dimensions();
        let mut padded = RasterImage::new(w + 2 * margin, h + 2 * margin, fill);
        padded
            .pixels
            .slice_mut(s![margin..margin + h, margin..margin + w, ..])
            .assign(&self.pixels);
        padded
    }

    /// Copies `region` out of the image. Parts of the region outside the image are set to `fill`.
    pub fn crop(&self, region: PixelRegion, fill: Color) -> RasterImage {
        let mut cropped = RasterImage::new(region.width, region.height, fill);

        //overlap between the region and the image, in image coordinates
        let x0 = region.x.max(0);
        let y0 = region.y.max(0);
        let x1 = region.x_end().min(self.width() as i64);
        let y1 = region.y_end().min(self.height() as i64);

        if x0 < x1 && y0 < y1 {
            let (dx0, dy0) = ((x0 - region.x) as usize, (y0 - region.y) as usize);
            let (dx1, dy1) = ((x1 - region.x) as usize, (y1 - region.y) as usize);
            cropped
                .pixels
                .slice_mut(s![dy0..dy1, dx0..dx1, ..])
                .assign(&self.pixels.slice(s![
                    y0 as usize..y1 as usize,
                    x0 as usize..x1 as usize,
                    ..
                ]));
        }
        cropped
    }

    /// Keeps the pixels covered by `mask` and sets all others to `fill`.
    /// The mask is interpreted relative to the top-left corner of the image.
    pub fn apply_mask(&self, mask: &Mask, fill: Color) -> Result<RasterImage> {
        let region = mask.region();
        ensure!(
            (region.width, region.height) == self.dimensions(),
            "mask of {}x{} does not match image of {}x{}",
            region.width,
            region.height,
            self.width(),
            self.height()
        );
        let fill = fill.channels();
        let mut masked = self.clone();
        masked
            .pixels
            .indexed_iter_mut()
            .filter(|((y, x, _), _)| !mask.get(*x, *y))
            .for_each(|((_, _, c), v)| *v = fill[c]);
        Ok(masked)
    }

    /// Sets every pixel covered by `mask` (in image coordinates) to `color`.
    /// Parts of the mask outside the image are ignored.
    pub fn paint(&mut self, mask: &Mask, color: Color) {
        let region = mask.region();
        for row in 0..region.height {
            for col in 0..region.width {
                let (x, y) = (region.x + col as i64, region.y + row as i64);
                if mask.get(col, row) && self.in_bounds(x, y) {
                    self.put_pixel(x as usize, y as usize, color);
                }
            }
        }
    }
}
