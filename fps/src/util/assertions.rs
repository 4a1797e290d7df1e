use tessera::entities::Placement;
use tessera::geometry::primitives::{Point, Rect};

use crate::opt::search::score;
use crate::samplers::candidate_grid::CandidateGrid;

/// `chosen` is the first candidate in scan order that attains the highest score, and scores `chosen_score`
pub fn is_best_candidate(
    grid: &CandidateGrid,
    canvas: &Rect,
    placed: &[Placement],
    chosen: Point,
    chosen_score: f64,
) -> bool {
    let scores = grid
        .candidates()
        .iter()
        .map(|c| (*c, score(*c, canvas, placed)))
        .collect::<Vec<_>>();

    let max = scores.iter().map(|(_, s)| *s).fold(f64::MIN, f64::max);
    let first_max = scores.iter().find(|(_, s)| *s == max).map(|(c, _)| *c);

    chosen_score == max && first_max == Some(chosen)
}
