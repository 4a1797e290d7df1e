/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Rendering of a [`PositionList`](crate::entities::PositionList) into a raster image
pub mod preview;

/// All logic for creating SVG from a [`PositionList`](crate::entities::PositionList)
pub mod svg;
