use rayon::prelude::*;
use tessera::entities::Placement;
use tessera::geometry::primitives::{Point, Rect};

use crate::samplers::candidate_grid::CandidateGrid;

/// Distance from `p` to the nearest of the four borders of the canvas
pub fn distance_to_edges(p: Point, canvas: &Rect) -> f64 {
    canvas.distance_to_border(p)
}

/// Smallest Euclidean distance from `p` to the center of any of the `placed` tiles.
/// Infinite when nothing has been placed yet.
pub fn distance_to_points(p: Point, placed: &[Placement]) -> f64 {
    placed
        .iter()
        .map(|pl| p.sq_distance(&pl.center()))
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// How far `p` is from everything it should stay away from
pub fn score(p: Point, canvas: &Rect, placed: &[Placement]) -> f64 {
    f64::min(distance_to_edges(p, canvas), distance_to_points(p, placed))
}

/// Scores every candidate of the grid and returns the best one together with its score.
///
/// Ties go to the candidate that comes first in scan order (lowest y, then lowest x).
/// The scores are computed in parallel, the selection is sequential.
pub fn search(grid: &CandidateGrid, canvas: &Rect, placed: &[Placement]) -> Option<(Point, f64)> {
    let scores: Vec<f64> = grid
        .candidates()
        .par_iter()
        .map(|c| score(*c, canvas, placed))
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for (i, s) in scores.into_iter().enumerate() {
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((i, s)),
        }
    }

    best.map(|(i, s)| (grid.candidates()[i], s))
}
