mod canvas;
mod placement;

#[doc(inline)]
pub use canvas::CanvasGeometry;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::PositionList;
