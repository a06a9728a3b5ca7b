#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! Packed, fixed-capacity buffers for procedural content generation.
//!
//! Every store here owns one flat `Vec` of numbers with a fixed record stride. Downstream geometry
//! builders read those slices slot-for-slot, so the layouts are part of the public contract:
//!
//! | Store | Record stride | Offset 0-2 | Offset 3 | Offset 4+ |
//! |---|---|---|---|---|
//! | `StandardPcgPoints` | `4 + extension_count` `f32` | position x, y, z | mask (`u32` bits) | extension payload |
//! | `StandardPcgVoxels` | 1 `i32` per cell | value | | |
//! | `StandardPcgSdf` | 4 `f32` per sphere | center x, y, z | squared radius | |
//!
//! The stores never resize. Bulk mutation goes through processor traits (`PointProcessor`,
//! `VoxelBufferProcessor`, `VoxelPositionProcessor`) which borrow the raw buffer for the duration
//! of a single call.
//!
//! Out-of-range indices, exceeded capacity and misaligned ranges are programming errors. They
//! panic rather than returning errors.

pub mod point_cloud;
pub mod sdf;
pub mod voxel_grid;

pub use point_cloud::*;
pub use sdf::*;
pub use voxel_grid::*;

pub mod prelude {
    pub use super::{
        PointLayout, PointProcessor, StandardPcgPoints, StandardPcgSdf, StandardPcgVoxels,
        VoxelBufferProcessor, VoxelGridLayout, VoxelPositionProcessor,
    };
}
