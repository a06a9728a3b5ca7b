//! A fixed-capacity point cloud stored as one flat `f32` buffer.
//!
//! # Layout
//!
//! Each point is a record of `4 + extension_count` slots:
//!   - `0..=2`: position x, y, z
//!   - `3`: a 32-bit mask word, stored by reinterpreting the bits of a `u32` as an `f32`
//!   - `4..`: free-form extension payload
//!
//! The mask slot is never read as a number. Bit 0 means "visible". The other bits are reserved
//! for later passes.
//!
//! # Indexing
//!
//! Store methods take a point index. The free functions in [`component`] take a *component-space*
//! index instead, which is the offset of a record's first slot (`point_index * component_size`).
//! Processors work in component space so they can be handed any aligned sub-range of the buffer.
//!
//! ```
//! use pcg_blocks_core::prelude::*;
//! use pcg_blocks_storage::prelude::*;
//! use pcg_blocks_storage::component::*;
//!
//! let mut points = StandardPcgPoints::with_extensions(8, 1);
//! assert_eq!(points.component_size(), 5);
//!
//! // Lay the points out on a line and tag each with its index.
//! points.process(&mut |layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize| {
//!     for (n, i) in layout.records(start, end).enumerate() {
//!         apply_position(buffer, i, n as f32, 0.0, 0.0);
//!         apply_is_visible(buffer, i, true);
//!         apply_extended_component(buffer, i, 0, n as f32);
//!     }
//! });
//!
//! let mut p = Point3f::ZERO;
//! assert_eq!(*points.position(3, &mut p), PointN([3.0, 0.0, 0.0]));
//! assert_eq!(points.mask(3), MASK_VISIBLE);
//! assert_eq!(points.visible_count(), 8);
//! ```

pub mod component;

pub use component::{MASK_ALL, MASK_VISIBLE};

use component::{retrieve_mask, retrieve_position};

use pcg_blocks_core::prelude::*;

use core::iter::StepBy;
use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of slots every point record has before its extension payload.
pub const BASE_COMPONENT_SIZE: usize = 4;

/// Describes the record stride of a point cloud buffer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PointLayout {
    /// Number of free-form `f32` slots after the mask.
    pub extension_count: usize,
}

impl PointLayout {
    /// Position and mask only.
    pub const STANDARD: Self = Self { extension_count: 0 };

    #[inline]
    pub fn with_extensions(extension_count: usize) -> Self {
        Self { extension_count }
    }

    /// Number of slots per point record. Panics if `extension_count` is so large the size overflows.
    #[inline]
    pub fn component_size(&self) -> usize {
        BASE_COMPONENT_SIZE
            .checked_add(self.extension_count)
            .unwrap_or_else(|| {
                panic!(
                    "point record size overflows with {} extension slots",
                    self.extension_count
                )
            })
    }

    /// The component-space index of the record for point `index`.
    #[inline]
    pub fn record_offset(&self, index: usize) -> usize {
        index * self.component_size()
    }

    /// Returns `true` iff `i` lands on the first slot of a record.
    #[inline]
    pub fn is_aligned(&self, i: usize) -> bool {
        i % self.component_size() == 0
    }

    /// Iterates over the component-space index of every record in `[start, end)`.
    #[inline]
    pub fn records(&self, start: usize, end: usize) -> StepBy<Range<usize>> {
        debug_assert!(start <= end);
        debug_assert!(self.is_aligned(start) && self.is_aligned(end));

        (start..end).step_by(self.component_size())
    }
}

/// Mutates a sub-range of a point cloud buffer in place.
///
/// `start` and `end` are component-space offsets, both multiples of `layout.component_size()`, with
/// `start <= end <= buffer.len()`. Implementations must only touch `buffer[start..end]`, which is
/// what lets callers hand disjoint ranges to different processors.
///
/// Implemented for closures with the same signature.
pub trait PointProcessor {
    fn process(&mut self, layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize);
}

impl<F> PointProcessor for F
where
    F: FnMut(&PointLayout, &mut [f32], usize, usize),
{
    #[inline]
    fn process(&mut self, layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize) {
        (self)(layout, buffer, start, end)
    }
}

/// A fixed number of point records in one zero-initialized buffer. Never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardPcgPoints {
    layout: PointLayout,
    values: Vec<f32>,
}

impl StandardPcgPoints {
    /// `count` points with no extension payload.
    pub fn new(count: usize) -> Self {
        Self::with_layout(count, PointLayout::STANDARD)
    }

    /// `count` points with `extension_count` extra slots each.
    pub fn with_extensions(count: usize, extension_count: usize) -> Self {
        Self::with_layout(count, PointLayout::with_extensions(extension_count))
    }

    /// Panics if the buffer length `count * component_size` overflows `usize`.
    pub fn with_layout(count: usize, layout: PointLayout) -> Self {
        let component_size = layout.component_size();
        let len = count.checked_mul(component_size).unwrap_or_else(|| {
            panic!(
                "point cloud of {} points with component size {} overflows usize",
                count, component_size
            )
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            count,
            component_size = layout.component_size(),
            "allocating point cloud"
        );

        Self {
            layout,
            values: vec![0.0; len],
        }
    }

    #[inline]
    pub fn layout(&self) -> &PointLayout {
        &self.layout
    }

    /// Number of slots per point record, i.e. `4 + extension_count`.
    #[inline]
    pub fn component_size(&self) -> usize {
        self.layout.component_size()
    }

    #[inline]
    pub fn extension_count(&self) -> usize {
        self.layout.extension_count
    }

    /// The number of point records.
    #[inline]
    pub fn count(&self) -> usize {
        self.values.len() / self.component_size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw buffer, for downstream consumers that read the packed layout directly.
    #[inline]
    pub fn values_slice(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    #[inline]
    fn checked_record_offset(&self, index: usize) -> usize {
        assert!(
            index < self.count(),
            "point index {} out of bounds for {} points",
            index,
            self.count()
        );

        self.layout.record_offset(index)
    }

    /// Reads the position of point `index` into `out` and returns it.
    #[inline]
    pub fn position<'a>(&self, index: usize, out: &'a mut Point3f) -> &'a mut Point3f {
        let i = self.checked_record_offset(index);

        retrieve_position(&self.values, i, out)
    }

    #[inline]
    pub fn set_position(&mut self, index: usize, x: f32, y: f32, z: f32) {
        let i = self.checked_record_offset(index);

        component::apply_position(&mut self.values, i, x, y, z);
    }

    /// The mask word of point `index`.
    #[inline]
    pub fn mask(&self, index: usize) -> u32 {
        let i = self.checked_record_offset(index);

        retrieve_mask(&self.values, i)
    }

    #[inline]
    pub fn is_visible(&self, index: usize) -> bool {
        self.mask(index) & MASK_VISIBLE != 0
    }

    /// The number of points whose visible bit is set.
    pub fn visible_count(&self) -> usize {
        // Typed view of the same memory; mask slots are only ever read as bits.
        let words: &[u32] = bytemuck::cast_slice(&self.values);

        words
            .iter()
            .skip(component::MASK_OFFSET)
            .step_by(self.component_size())
            .filter(|&&mask| mask & MASK_VISIBLE != 0)
            .count()
    }

    /// Runs `processor` once over the whole buffer, `[0, len)`.
    pub fn process<P>(&mut self, processor: &mut P)
    where
        P: PointProcessor + ?Sized,
    {
        let end = self.values.len();

        self.process_range(processor, 0, end)
    }

    /// Runs `processor` over the component-space range `[start, end)`.
    ///
    /// Panics if the range is inverted, out of bounds, or does not start and end on record
    /// boundaries.
    pub fn process_range<P>(&mut self, processor: &mut P, start: usize, end: usize)
    where
        P: PointProcessor + ?Sized,
    {
        assert!(start <= end, "inverted range [{}, {})", start, end);
        assert!(
            end <= self.values.len(),
            "range end {} exceeds buffer length {}",
            end,
            self.values.len()
        );
        assert!(
            self.layout.is_aligned(start) && self.layout.is_aligned(end),
            "range [{}, {}) is not aligned to component size {}",
            start,
            end,
            self.component_size()
        );

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("process_points", start, end).entered();

        processor.process(&self.layout, &mut self.values, start, end);
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
