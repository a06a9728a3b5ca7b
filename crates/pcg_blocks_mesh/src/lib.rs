#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! Turns packed point clouds into vertex data for downstream geometry builders.
//!
//! A `VertexTransform` maps a world position to a texture coordinate. `write_uvs` runs one over a
//! whole `StandardPcgPoints`, and `PosTexMesh` collects the visible points into plain vertex
//! attribute vectors.
//!
//! ```
//! use pcg_blocks_mesh::{PosTexMesh, Vertex32ScaledRepeatXz};
//! use pcg_blocks_storage::{component::apply_mask, StandardPcgPoints, MASK_VISIBLE};
//!
//! let mut points = StandardPcgPoints::new(2);
//! points.set_position(0, 1.25, 0.0, -0.25);
//! points.set_position(1, 3.0, 0.0, 0.0);
//! apply_mask(points.values_mut(), 0, MASK_VISIBLE);
//!
//! let mut mesh = PosTexMesh::default();
//! mesh.extend_from_visible_points(&points, &Vertex32ScaledRepeatXz::new(1.0));
//!
//! assert_eq!(mesh.positions, vec![[1.25, 0.0, -0.25]]);
//! assert_eq!(mesh.tex_coords, vec![[0.25, 0.75]]);
//! ```

mod vertex_transform;

pub use vertex_transform::*;

use pcg_blocks_core::prelude::*;
use pcg_blocks_storage::{
    component::{retrieve_is_visible, retrieve_position},
    StandardPcgPoints,
};

/// Unindexed point vertices with texture coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PosTexMesh {
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates, AKA UVs.
    pub tex_coords: Vec<[f32; 2]>,
}

impl PosTexMesh {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.tex_coords.clear();
    }

    /// Appends one vertex per visible point, in record order. Hidden points are skipped.
    pub fn extend_from_visible_points<T>(&mut self, points: &StandardPcgPoints, transform: &T)
    where
        T: VertexTransform + ?Sized,
    {
        let buffer = points.values_slice();
        let mut p = Point3f::ZERO;
        let mut uv = Point2f::ZERO;
        for i in points.layout().records(0, buffer.len()) {
            if !retrieve_is_visible(buffer, i) {
                continue;
            }
            retrieve_position(buffer, i, &mut p);
            transform.transform(p.x(), p.y(), p.z(), &mut uv);
            self.positions.push(p.0);
            self.tex_coords.push(uv.0);
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
