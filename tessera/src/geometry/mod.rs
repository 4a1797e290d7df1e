pub mod geo_traits;
pub mod primitives;
mod transformation;

#[doc(inline)]
pub use transformation::Transformation;
