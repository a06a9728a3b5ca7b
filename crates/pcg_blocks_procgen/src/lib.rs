#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! Processors that populate and filter the packed PCG stores.
//!
//! A typical pipeline runs `RandomizePointPositions` first to establish a baseline set of visible
//! points, then passes like `HidePointsInsideSdf` that only flip individual mask bits.
//!
//! ```
//! use pcg_blocks_core::prelude::*;
//! use pcg_blocks_procgen::{HidePointsInsideSdf, RandomizePointPositions};
//! use pcg_blocks_storage::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut points = StandardPcgPoints::new(1000);
//! let bounds = Extent3f::from_min_and_shape(Point3f::fill(-8.0), Point3f::fill(16.0));
//! points.process(&mut RandomizePointPositions::new(StdRng::seed_from_u64(0), bounds));
//! assert_eq!(points.visible_count(), 1000);
//!
//! let mut sdf = StandardPcgSdf::new(1);
//! sdf.add_sphere(0.0, 0.0, 0.0, 4.0);
//! points.process(&mut HidePointsInsideSdf::new(&sdf, 0.0));
//! assert!(points.visible_count() < 1000);
//! ```

mod randomize_point_positions;
mod sdf_culling;
mod voxelize_sdf;

pub use randomize_point_positions::*;
pub use sdf_culling::*;
pub use voxelize_sdf::*;
