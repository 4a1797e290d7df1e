mod color;
mod raster_image;
mod mask;
mod resample;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use raster_image::{CHANNELS, PixelRegion, RasterImage};
#[doc(inline)]
pub use mask::Mask;
#[doc(inline)]
pub use resample::Interpolation;
