//! Packed, flat buffers for procedural content generation, and the processors that fill them.
//!
//! This library is organized into several crates. The most fundamental are:
//! - **core**: points, extents and spheres
//! - **storage**: the point cloud, voxel grid and sphere SDF stores, plus their processor traits
//!
//! Then you get extra bits of functionality from the others:
//! - **procgen**: random point placement, SDF culling and SDF voxelization
//! - **mesh**: vertex transforms that turn point clouds into texture coordinates
//!
//! Every store owns one `Vec` with a fixed record stride and is never resized. Processors borrow
//! the raw buffer for one call, which keeps per-element work allocation-free:
//!
//! ```
//! use pcg_blocks::prelude::*;
//! use pcg_blocks::procgen::{HidePointsInsideSdf, RandomizePointPositions, VoxelizeSdf};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut sdf = StandardPcgSdf::new(2);
//! sdf.add_sphere(-2.0, 0.0, 0.0, 1.5);
//! sdf.add_sphere(2.0, 0.0, 0.0, 1.5);
//!
//! let bounds = Extent3f::from_min_and_shape(Point3f::fill(-4.0), Point3f::fill(8.0));
//! let mut points = StandardPcgPoints::new(256);
//! points.process(&mut RandomizePointPositions::new(StdRng::seed_from_u64(1), bounds));
//! points.process(&mut HidePointsInsideSdf::new(&sdf, 0.0));
//!
//! let mut voxels = StandardPcgVoxels::new(8, 8, 8, Point3f::fill(-4.0));
//! voxels.process_positions(&mut VoxelizeSdf::new(&sdf, 1, 0.0));
//! assert_eq!(voxels.get(2, 4, 4), 1);
//! assert_eq!(voxels.get(0, 0, 0), 0);
//! ```

pub use pcg_blocks_core as core;
pub use pcg_blocks_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "mesh")]
    pub use super::mesh::{PosTexMesh, Vertex32ScaledRepeatXz, VertexTransform};
}

#[cfg(feature = "mesh")]
pub use pcg_blocks_mesh as mesh;

#[cfg(feature = "procgen")]
pub use pcg_blocks_procgen as procgen;
