#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! The core math types shared by the packed PCG buffers:
//! - `PointN`: a fixed-size `f32` point, most importantly `Point2f` and `Point3f`
//! - `Extent3f`: an axis-aligned bounding volume
//! - `Sphere3`: a center and radius, as stored by the sphere SDF

pub mod extent;
pub mod float_math;
pub mod point;
pub mod sphere;

pub use extent::{Extent3f, ExtentN};
pub use float_math::{positive_fract, repeat_unit};
pub use point::{Point, Point2f, Point3f, PointN};
pub use sphere::Sphere3;

pub use num;

pub mod prelude {
    pub use super::{Extent3f, ExtentN, Point, Point2f, Point3f, PointN, Sphere3};
}
