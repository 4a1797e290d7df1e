use serde::{Deserialize, Serialize};

/// External representation of a [`Placement`](crate::entities::Placement):
/// `[x, y, rotation]` with the rotation in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement(pub f64, pub f64, pub f64);

/// External representation of a [`PositionList`](crate::entities::PositionList).
/// The order of the elements is the order of the tiles.
pub type ExtPositionList = Vec<ExtPlacement>;
