pub mod geometry;
pub mod platform;

pub use geometry::Size;
pub use platform::{Platform, Viewport};
