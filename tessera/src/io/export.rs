use crate::entities::{Placement, PositionList};
use crate::io::ext_repr::{ExtPlacement, ExtPositionList};

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement(placement.x, placement.y, placement.rotation)
}

pub fn export_positions(positions: &PositionList) -> ExtPositionList {
    positions.iter().map(export_placement).collect()
}
