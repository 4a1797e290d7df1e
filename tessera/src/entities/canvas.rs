use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::entities::Placement;
use crate::geometry::primitives::{Rect, SPolygon};

/// Logical canvas on which tiles are scattered, together with the nominal size of a tile.
/// Independent of the pixel resolution of any photo.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub tile_width: f64,
    pub tile_height: f64,
}

impl CanvasGeometry {
    pub fn try_new(width: f64, height: f64, tile_width: f64, tile_height: f64) -> Result<Self> {
        let geometry = Self {
            width,
            height,
            tile_width,
            tile_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks whether all dimensions are strictly positive and finite
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("canvas width", self.width),
            ("canvas height", self.height),
            ("tile width", self.tile_width),
            ("tile height", self.tile_height),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be strictly positive, got {value}"
            );
        }
        Ok(())
    }

    /// The canvas as a rectangle with its top-left corner at the origin
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// The outline of a tile at `placement`, in canvas coordinates
    pub fn tile_polygon(&self, placement: &Placement) -> Result<SPolygon> {
        SPolygon::rotated_rectangle(
            placement.center(),
            self.tile_width,
            self.tile_height,
            placement.rotation,
        )
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            tile_width: 150.0,
            tile_height: 100.0,
        }
    }
}
