pub mod fps_optimizer;
pub mod search;

use rand::Rng;
use tessera::entities::{CanvasGeometry, PositionList};

use crate::config::FPSConfig;
use crate::error::FpsError;
use crate::opt::fps_optimizer::FPSOptimizer;

/// Places `count` tiles of `tile_width` x `tile_height` on a canvas of `canvas_width` x `canvas_height`,
/// searching on a grid with the default sampling stride.
pub fn place(
    canvas_width: f64,
    canvas_height: f64,
    tile_width: f64,
    tile_height: f64,
    count: usize,
    rng: &mut impl Rng,
) -> Result<PositionList, FpsError> {
    let geometry = CanvasGeometry::try_new(canvas_width, canvas_height, tile_width, tile_height)
        .map_err(FpsError::configuration)?;
    let config = FPSConfig {
        geometry,
        n_placements: count,
        ..FPSConfig::default()
    };
    FPSOptimizer::new(config, rng)?.solve()
}
