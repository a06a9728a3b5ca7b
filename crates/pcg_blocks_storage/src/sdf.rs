//! An append-only union of spheres with an approximate distance query.
//!
//! Spheres are packed as `(x, y, z, radius²)` records of 4 `f32`s, in insertion order.
//!
//! # Distance query
//!
//! `get_min` returns 0 as soon as the query point is strictly inside any sphere, without looking at
//! the rest. Otherwise it returns `sqrt(min(d² - r²))` over all spheres, where `d` is the distance
//! to a sphere's center. That is the length of a tangent from the query point to the sphere, not
//! the distance to its surface (`d - r`). The two agree on the surface and drift apart further
//! out, so only use the result as a coarse estimate, like a culling threshold.
//!
//! ```
//! use pcg_blocks_storage::StandardPcgSdf;
//!
//! let mut sdf = StandardPcgSdf::new(1);
//! sdf.add_sphere(0.0, 0.0, 0.0, 2.0);
//!
//! assert_eq!(sdf.get_min(0.0, 0.0, 0.0), 0.0);
//! assert_eq!(sdf.get_min(3.0, 0.0, 0.0), 5.0f32.sqrt());
//! ```

use pcg_blocks_core::prelude::*;

/// Number of `f32` slots per sphere record.
pub const SPHERE_COMPONENT_SIZE: usize = 4;

/// Fixed capacity for `element_count` spheres, filled from the front.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardPcgSdf {
    values: Vec<f32>,
    count: usize,
}

impl StandardPcgSdf {
    /// Panics if `element_count` is zero or its buffer length overflows `usize`.
    pub fn new(element_count: usize) -> Self {
        assert!(element_count > 0, "SDF capacity must be positive");
        let len = element_count
            .checked_mul(SPHERE_COMPONENT_SIZE)
            .unwrap_or_else(|| panic!("SDF capacity of {} spheres overflows usize", element_count));

        #[cfg(feature = "tracing")]
        tracing::debug!(element_count, "allocating sphere SDF");

        Self {
            values: vec![0.0; len],
            count: 0,
        }
    }

    /// The number of spheres added so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The maximum number of spheres.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len() / SPHERE_COMPONENT_SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Appends a sphere. Panics if the capacity is used up.
    pub fn add_sphere(&mut self, x: f32, y: f32, z: f32, radius: f32) {
        assert!(
            !self.is_full(),
            "SDF is full ({} spheres)",
            self.capacity()
        );

        let i = self.count * SPHERE_COMPONENT_SIZE;
        self.values[i..i + SPHERE_COMPONENT_SIZE].copy_from_slice(&[x, y, z, radius * radius]);
        self.count += 1;
    }

    /// The packed `(x, y, z, radius²)` records of the spheres added so far.
    #[inline]
    pub fn records(&self) -> &[[f32; SPHERE_COMPONENT_SIZE]] {
        bytemuck::cast_slice(self.values_slice())
    }

    /// The filled part of the raw buffer.
    #[inline]
    pub fn values_slice(&self) -> &[f32] {
        &self.values[..self.count * SPHERE_COMPONENT_SIZE]
    }

    /// Sphere `index` in insertion order. Panics if `index >= count`.
    pub fn sphere(&self, index: usize) -> Sphere3 {
        let [x, y, z, radius_squared] = self.records()[index];

        Sphere3 {
            center: PointN([x, y, z]),
            radius: radius_squared.sqrt(),
        }
    }

    /// Approximate distance from `(x, y, z)` to the union of spheres; see the module docs.
    /// Returns `f32::INFINITY` when no spheres have been added.
    pub fn get_min(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut best = f32::INFINITY;
        for &[cx, cy, cz, radius_squared] in self.records() {
            let dx = x - cx;
            let dy = y - cy;
            let dz = z - cz;
            let sq_dist = dx * dx + dy * dy + dz * dz;
            if sq_dist < radius_squared {
                return 0.0;
            }
            best = best.min(sq_dist - radius_squared);
        }

        best.sqrt()
    }

    #[inline]
    pub fn get_min_point(&self, p: &Point3f) -> f32 {
        self.get_min(p.x(), p.y(), p.z())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
