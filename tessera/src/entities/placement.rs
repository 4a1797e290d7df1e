use std::fmt::Display;
use std::ops::Index;

use crate::geometry::primitives::Point;

/// Where and how a single tile sits on the canvas
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Placement {
    /// x-coordinate of the tile's center
    pub x: f64,
    /// y-coordinate of the tile's center
    pub y: f64,
    /// Rotation of the tile around its own center, in degrees
    pub rotation: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    pub fn center(&self) -> Point {
        Point(self.x, self.y)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, t: ({:.3}, {:.3})",
            self.rotation, self.x, self.y
        )
    }
}

/// Ordered, immutable list of placements.
/// The index of a placement is also the index of the tile cut for it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PositionList(Vec<Placement>);

impl PositionList {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self(placements)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.0
    }

    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().map(|p| p.center())
    }
}

impl Index<usize> for PositionList {
    type Output = Placement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PositionList {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Placement> for PositionList {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
