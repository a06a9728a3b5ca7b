//! A dense 3D grid of `i32` values with a world-space origin.
//!
//! # Indexing
//!
//! Cells are flattened with x as the outermost stride and z contiguous:
//!
//! ```text
//! index(x, y, z) = x * height * depth + y * depth + z
//! ```
//!
//! Indexing checks that each coordinate is inside the grid and panics otherwise.
//!
//! # Traversal
//!
//! A `VoxelBufferProcessor` gets the whole raw buffer at once. A `VoxelPositionProcessor` is
//! called once per cell, in flattening order, with float coordinates and the flat index of that
//! cell. Since the two orders agree, positional processors never have to compute an index.
//!
//! ```
//! use pcg_blocks_core::prelude::*;
//! use pcg_blocks_storage::prelude::*;
//!
//! let mut voxels = StandardPcgVoxels::new(4, 3, 2, PointN([10.0, 0.0, 0.0]));
//!
//! // Fill the cells whose world position is past x = 12.
//! voxels.process_positions(
//!     &mut |layout: &VoxelGridLayout, buffer: &mut [i32], x: f32, y: f32, z: f32, index: usize| {
//!         if layout.world_position(x, y, z).x() > 12.0 {
//!             buffer[index] = 1;
//!         }
//!     },
//! );
//!
//! assert_eq!(voxels.get(3, 0, 0), 1);
//! assert_eq!(voxels.get(2, 2, 1), 0);
//! ```

use pcg_blocks_core::prelude::*;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The immutable shape and placement of a voxel grid.
///
/// Every dimension is positive and the cell count fits in `usize`. Deserialized layouts are
/// checked the same way as `VoxelGridLayout::new`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "UncheckedVoxelGridLayout")
)]
pub struct VoxelGridLayout {
    width: usize,
    height: usize,
    depth: usize,
    origin: Point3f,
}

impl VoxelGridLayout {
    /// Panics if any dimension is zero or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize, depth: usize, origin: Point3f) -> Self {
        match Self::checked_new(width, height, depth, origin) {
            Ok(layout) => layout,
            Err(error) => panic!("{}", error),
        }
    }

    fn checked_new(
        width: usize,
        height: usize,
        depth: usize,
        origin: Point3f,
    ) -> Result<Self, InvalidVoxelGridLayout> {
        let invalid = InvalidVoxelGridLayout {
            width,
            height,
            depth,
        };
        if width == 0 || height == 0 || depth == 0 {
            return Err(invalid);
        }
        width
            .checked_mul(height)
            .and_then(|area| area.checked_mul(depth))
            .ok_or(invalid)?;

        Ok(Self {
            width,
            height,
            depth,
            origin,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `[width, height, depth]`
    #[inline]
    pub fn dimensions(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    /// World position of grid coordinate `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point3f {
        self.origin
    }

    /// The total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Always `false`, since every dimension is positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance in the flat buffer between neighbors along X.
    #[inline]
    pub fn x_stride(&self) -> usize {
        self.height * self.depth
    }

    /// Distance in the flat buffer between neighbors along Y.
    #[inline]
    pub fn y_stride(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    /// The flat buffer index of cell `(x, y, z)`. Panics if the cell is outside the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        assert!(
            self.contains(x, y, z),
            "voxel ({}, {}, {}) out of bounds for {}x{}x{} grid",
            x,
            y,
            z,
            self.width,
            self.height,
            self.depth
        );

        x * self.x_stride() + y * self.y_stride() + z
    }

    /// Grid coordinates translated by the origin into world space.
    #[inline]
    pub fn world_position(&self, x: f32, y: f32, z: f32) -> Point3f {
        self.origin + PointN([x, y, z])
    }

    /// The value of the cell offset from flat index `component_index` by `(off_x, off_y, off_z)`.
    ///
    /// This is plain stride arithmetic. It does not wrap or clamp at the grid faces, so an X or Y
    /// offset that walks off one face lands on some other cell. The caller must keep the offset cell
    /// inside the grid; the only check is that the final index is inside the buffer.
    #[inline]
    pub fn retrieve_offset_value(
        &self,
        buffer: &[i32],
        component_index: usize,
        off_x: isize,
        off_y: isize,
        off_z: isize,
    ) -> i32 {
        let offset =
            off_x * self.x_stride() as isize + off_y * self.y_stride() as isize + off_z;
        let index = component_index as isize + offset;
        assert!(
            index >= 0 && (index as usize) < buffer.len(),
            "offset voxel index {} out of bounds for buffer of length {}",
            index,
            buffer.len()
        );

        buffer[index as usize]
    }
}

/// Dimensions that are zero or whose product overflows `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidVoxelGridLayout {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl fmt::Display for InvalidVoxelGridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "voxel grid dimensions must be positive with a cell count that fits in usize, got {}x{}x{}",
            self.width, self.height, self.depth
        )
    }
}

impl std::error::Error for InvalidVoxelGridLayout {}

/// The wire form of `VoxelGridLayout`, validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedVoxelGridLayout {
    width: usize,
    height: usize,
    depth: usize,
    origin: Point3f,
}

#[cfg(feature = "serde")]
impl core::convert::TryFrom<UncheckedVoxelGridLayout> for VoxelGridLayout {
    type Error = InvalidVoxelGridLayout;

    fn try_from(raw: UncheckedVoxelGridLayout) -> Result<Self, Self::Error> {
        Self::checked_new(raw.width, raw.height, raw.depth, raw.origin)
    }
}

/// Inspects or mutates the whole voxel buffer in one call.
///
/// Implemented for closures with the same signature.
pub trait VoxelBufferProcessor {
    fn process(&mut self, layout: &VoxelGridLayout, buffer: &mut [i32]);
}

impl<F> VoxelBufferProcessor for F
where
    F: FnMut(&VoxelGridLayout, &mut [i32]),
{
    #[inline]
    fn process(&mut self, layout: &VoxelGridLayout, buffer: &mut [i32]) {
        (self)(layout, buffer)
    }
}

/// Called once per cell, with the cell's grid coordinates and flat index.
///
/// Implemented for closures with the same signature.
pub trait VoxelPositionProcessor {
    fn process(
        &mut self,
        layout: &VoxelGridLayout,
        buffer: &mut [i32],
        x: f32,
        y: f32,
        z: f32,
        index: usize,
    );
}

impl<F> VoxelPositionProcessor for F
where
    F: FnMut(&VoxelGridLayout, &mut [i32], f32, f32, f32, usize),
{
    #[inline]
    fn process(
        &mut self,
        layout: &VoxelGridLayout,
        buffer: &mut [i32],
        x: f32,
        y: f32,
        z: f32,
        index: usize,
    ) {
        (self)(layout, buffer, x, y, z, index)
    }
}

/// A dense `width * height * depth` grid of `i32`, zero-initialized. Never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardPcgVoxels {
    layout: VoxelGridLayout,
    values: Vec<i32>,
}

impl StandardPcgVoxels {
    /// Panics if any dimension is zero or the cell count overflows `usize`.
    pub fn new(width: usize, height: usize, depth: usize, origin: Point3f) -> Self {
        Self::with_layout(VoxelGridLayout::new(width, height, depth, origin))
    }

    pub fn with_layout(layout: VoxelGridLayout) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = layout.width(),
            height = layout.height(),
            depth = layout.depth(),
            "allocating voxel grid"
        );

        Self {
            layout,
            values: vec![0; layout.len()],
        }
    }

    #[inline]
    pub fn layout(&self) -> &VoxelGridLayout {
        &self.layout
    }

    #[inline]
    pub fn dimensions(&self) -> [usize; 3] {
        self.layout.dimensions()
    }

    #[inline]
    pub fn origin(&self) -> Point3f {
        self.layout.origin()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values_slice(&self) -> &[i32] {
        &self.values
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        self.layout.index(x, y, z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> i32 {
        self.values[self.layout.index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: i32) {
        let index = self.layout.index(x, y, z);
        self.values[index] = value;
    }

    #[inline]
    pub fn get_index_value(&self, index: usize) -> i32 {
        self.assert_index(index);

        self.values[index]
    }

    #[inline]
    pub fn set_index_value(&mut self, index: usize, value: i32) {
        self.assert_index(index);

        self.values[index] = value;
    }

    #[inline]
    fn assert_index(&self, index: usize) {
        assert!(
            index < self.values.len(),
            "voxel index {} out of bounds for {} cells",
            index,
            self.values.len()
        );
    }

    /// See `VoxelGridLayout::retrieve_offset_value`.
    #[inline]
    pub fn retrieve_offset_value(
        &self,
        component_index: usize,
        off_x: isize,
        off_y: isize,
        off_z: isize,
    ) -> i32 {
        self.layout
            .retrieve_offset_value(&self.values, component_index, off_x, off_y, off_z)
    }

    /// Hands the whole raw buffer to `processor`.
    pub fn process_buffer<P>(&mut self, processor: &mut P)
    where
        P: VoxelBufferProcessor + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("process_voxel_buffer", len = self.values.len()).entered();

        processor.process(&self.layout, &mut self.values);
    }

    /// Calls `processor` for every cell, x outermost and z innermost, so that `index` counts up
    /// by one per call and always equals `self.index(x, y, z)`.
    pub fn process_positions<P>(&mut self, processor: &mut P)
    where
        P: VoxelPositionProcessor + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::trace_span!("process_voxel_positions", len = self.values.len()).entered();

        let [width, height, depth] = self.layout.dimensions();
        let mut index = 0;
        for x in 0..width {
            let xf = x as f32;
            for y in 0..height {
                let yf = y as f32;
                for z in 0..depth {
                    processor.process(&self.layout, &mut self.values, xf, yf, z as f32, index);
                    index += 1;
                }
            }
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
