use anyhow::Result;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::{CanvasGeometry, PositionList};
use crate::geometry::primitives::SPolygon;
use crate::raster::{Color, Mask, RasterImage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    /// Every tile is a solid rectangle
    #[default]
    Fill,
    /// Only the border of every tile is drawn
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewOptions {
    #[serde(default)]
    pub mode: PreviewMode,
    /// Width of the border in [`PreviewMode::Outline`], in canvas units
    pub outline_thickness: f64,
    pub background: Color,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            mode: PreviewMode::Fill,
            outline_thickness: 2.0,
            background: Color::WHITE,
        }
    }
}

/// Renders every tile of `positions` in a random color on a canvas-sized image.
/// One canvas unit maps onto one pixel.
pub fn layout_to_raster(
    positions: &PositionList,
    geometry: &CanvasGeometry,
    options: PreviewOptions,
    rng: &mut impl Rng,
) -> Result<RasterImage> {
    let mut image = RasterImage::new(
        geometry.width.ceil() as usize,
        geometry.height.ceil() as usize,
        options.background,
    );

    for placement in positions {
        let color = Color(rng.random(), rng.random(), rng.random());
        let outer = Mask::rasterize(&geometry.tile_polygon(placement)?);

        let mask = match options.mode {
            PreviewMode::Fill => outer,
            PreviewMode::Outline => {
                let inner_width = geometry.tile_width - 2.0 * options.outline_thickness;
                let inner_height = geometry.tile_height - 2.0 * options.outline_thickness;
                match inner_width > 0.0 && inner_height > 0.0 {
                    true => {
                        let inner = SPolygon::rotated_rectangle(
                            placement.center(),
                            inner_width,
                            inner_height,
                            placement.rotation,
                        )?;
                        outer.subtract(&Mask::rasterize(&inner))
                    }
                    //border thicker than the tile itself
                    false => outer,
                }
            }
        };
        image.paint(&mask, color);
    }
    debug!(
        "[IO] rendered preview of {} tiles ({:?})",
        positions.len(),
        options.mode
    );

    Ok(image)
}
