use log::{debug, info};
use rand::Rng;
use tessera::entities::{CanvasGeometry, Placement, PositionList};
use tessera::util::assertions as tessera_assertions;
use thousands::Separable;

use crate::EPOCH;
use crate::config::FPSConfig;
use crate::error::FpsError;
use crate::opt::search::search;
use crate::samplers::candidate_grid::CandidateGrid;
use crate::samplers::rotation_distr::UniformRotDistr;
use crate::samplers::uniform_rect_sampler::UniformRectSampler;
use crate::util::assertions;

/// Farthest Point Sampling (FPS) optimizer.
///
/// Places a first tile uniformly at random, then repeatedly puts the next tile on the grid candidate
/// that is farthest away from both the borders of the canvas and every tile placed so far.
pub struct FPSOptimizer<R: Rng> {
    pub geometry: CanvasGeometry,
    pub config: FPSConfig,
    pub rng: R,
    /// Number of candidates scored so far
    pub candidate_counter: usize,
}

impl<R: Rng> FPSOptimizer<R> {
    pub fn new(config: FPSConfig, rng: R) -> Result<Self, FpsError> {
        config.validate()?;
        Ok(Self {
            geometry: config.geometry,
            config,
            rng,
            candidate_counter: 0,
        })
    }

    /// Draws from the rng in a fixed order: x, y and rotation of the first tile,
    /// followed by one rotation for every further tile.
    pub fn solve(&mut self) -> Result<PositionList, FpsError> {
        let start = EPOCH.elapsed();
        let n_placements = self.config.n_placements;
        if n_placements == 0 {
            info!("[FPS] no tiles requested");
            return Ok(PositionList::default());
        }

        let canvas = self.geometry.bbox();
        let uniform_r = UniformRotDistr::half_turn();
        let mut placements = Vec::with_capacity(n_placements);

        let first = UniformRectSampler::new(canvas, uniform_r.clone()).sample(&mut self.rng);
        info!("[FPS] placing tile 1/{n_placements} at [{first}] (random)");
        placements.push(first);

        if n_placements > 1 {
            let grid = CandidateGrid::new(canvas, self.config.sampling_stride)?;
            debug!(
                "[FPS] searching a grid of {} x {} candidates",
                grid.n_cols, grid.n_rows
            );

            for i in 1..n_placements {
                let (best, best_score) = search(&grid, &canvas, &placements).ok_or(
                    FpsError::DegenerateCanvas {
                        width: canvas.width(),
                        height: canvas.height(),
                        stride: grid.stride,
                    },
                )?;
                self.candidate_counter += grid.len();
                debug_assert!(assertions::is_best_candidate(
                    &grid,
                    &canvas,
                    &placements,
                    best,
                    best_score
                ));

                let placement = Placement::new(best.0, best.1, uniform_r.sample(&mut self.rng));
                info!(
                    "[FPS] placing tile {}/{} at [{}] (score {:.3})",
                    i + 1,
                    n_placements,
                    placement,
                    best_score
                );
                placements.push(placement);
            }
        }

        let positions = PositionList::new(placements);
        debug_assert!(tessera_assertions::positions_are_generated(&positions));
        debug_assert!(tessera_assertions::positions_within_canvas(
            &positions,
            &self.geometry
        ));

        info!(
            "[FPS] placed {} tiles in {:.3}ms ({} candidates scored)",
            positions.len(),
            (EPOCH.elapsed() - start).as_secs_f64() * 1000.0,
            self.candidate_counter.separate_with_commas()
        );
        Ok(positions)
    }
}
