use rand::Rng;
use tessera::entities::Placement;
use tessera::geometry::primitives::Rect;

use crate::samplers::rotation_distr::UniformRotDistr;

/// Samples a [`Placement`] from a uniform distribution over a given [`Rect`] (borders included)
/// and a [`UniformRotDistr`].
pub struct UniformRectSampler {
    pub bbox: Rect,
    pub uniform_r: UniformRotDistr,
}

impl UniformRectSampler {
    pub fn new(bbox: Rect, uniform_r: UniformRotDistr) -> Self {
        Self { bbox, uniform_r }
    }

    /// Draws x, then y, then the rotation
    pub fn sample(&self, rng: &mut impl Rng) -> Placement {
        let x_sample = rng.random_range(self.bbox.x_min..=self.bbox.x_max);
        let y_sample = rng.random_range(self.bbox.y_min..=self.bbox.y_max);
        let r_sample = self.uniform_r.sample(rng);

        Placement::new(x_sample, y_sample, r_sample)
    }
}
