use anyhow::{Result, ensure};

use crate::entities::{Placement, PositionList};
use crate::io::ext_repr::ExtPlacement;

/// Converts an external placement into an internal one
pub fn import_placement(ext: &ExtPlacement) -> Result<Placement> {
    let ExtPlacement(x, y, rotation) = *ext;
    ensure!(
        x.is_finite() && y.is_finite() && rotation.is_finite(),
        "placement contains non-finite values: [{x}, {y}, {rotation}]"
    );
    Ok(Placement::new(x, y, rotation))
}

/// Converts an external position list into an internal one, verbatim and in order
pub fn import_positions(ext: &[ExtPlacement]) -> Result<PositionList> {
    ext.iter().map(import_placement).collect()
}
