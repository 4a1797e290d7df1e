use float_cmp::approx_eq;
use tessera::entities::CanvasGeometry;

use crate::error::FpsError;

/// Number of photo pixels per canvas unit, identical along both axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Result<Self, FpsError> {
        match value.is_finite() && value > 0.0 {
            true => Ok(ScaleFactor(value)),
            false => Err(FpsError::Configuration(format!(
                "scale factor must be strictly positive, got {value}"
            ))),
        }
    }

    /// Derives the scale factor from the size of the photo.
    /// Fails when the photo does not have the aspect ratio of the canvas.
    pub fn derive(
        image_width: usize,
        image_height: usize,
        geometry: &CanvasGeometry,
    ) -> Result<Self, FpsError> {
        geometry.validate().map_err(FpsError::configuration)?;
        let scale_x = image_width as f64 / geometry.width;
        let scale_y = image_height as f64 / geometry.height;
        if !approx_eq!(f64, scale_x, scale_y) {
            return Err(FpsError::Configuration(format!(
                "scale factors differ (width: {scale_x}, height: {scale_y}), \
                 a {image_width}x{image_height} image does not have the aspect ratio of a {} x {} canvas",
                geometry.width, geometry.height
            )));
        }
        ScaleFactor::new(scale_x)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scales a canvas length or coordinate into photo pixels
    pub fn apply(&self, v: f64) -> f64 {
        v * self.0
    }

    /// Scales a canvas length or coordinate and rounds it to the nearest pixel.
    /// Stays in floating point, far-off coordinates do not saturate.
    pub fn to_pixels(&self, v: f64) -> f64 {
        self.apply(v).round()
    }
}
