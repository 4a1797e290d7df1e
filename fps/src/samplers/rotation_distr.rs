use std::ops::Range;

use rand::Rng;

/// Uniform distribution over a half-open range of rotations, in degrees.
#[derive(Clone, Debug)]
pub struct UniformRotDistr {
    range: Range<f64>,
}

impl UniformRotDistr {
    /// A rectangle rotated by 180° covers the same area, so [0, 180) covers all distinct orientations
    pub fn half_turn() -> Self {
        Self { range: 0.0..180.0 }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.random_range(self.range.clone())
    }
}

impl Default for UniformRotDistr {
    fn default() -> Self {
        Self::half_turn()
    }
}
