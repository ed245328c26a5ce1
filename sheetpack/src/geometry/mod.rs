mod rect;
mod rotation;

/// Traits shared by the geometric primitives
pub mod geo_traits;

#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use rotation::Rotation;
