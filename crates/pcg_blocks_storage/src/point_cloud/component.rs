//! Slot-level accessors over a raw point cloud buffer.
//!
//! Every function takes a component-space index `i`, the offset of a record's first slot. These
//! are what processors use inside their hot loops, so they are inlined and rely on the slice's own
//! indexing check. Record alignment is not checked here.
//!
//! The mask word is moved in and out of its `f32` slot with `f32::from_bits`/`f32::to_bits`. The
//! stored value may be a NaN or a denormal, which is fine as long as nothing does arithmetic on it.

use pcg_blocks_core::Point3f;

pub const POSITION_X_OFFSET: usize = 0;
pub const POSITION_Y_OFFSET: usize = 1;
pub const POSITION_Z_OFFSET: usize = 2;
pub const MASK_OFFSET: usize = 3;
pub const EXTENSION_OFFSET: usize = 4;

/// Bit 0 of the mask word.
pub const MASK_VISIBLE: u32 = 1;
/// Every bit of the mask word.
pub const MASK_ALL: u32 = u32::MAX;

#[inline]
pub fn retrieve_mask(buffer: &[f32], i: usize) -> u32 {
    buffer[i + MASK_OFFSET].to_bits()
}

/// Overwrites the whole mask word.
#[inline]
pub fn apply_mask(buffer: &mut [f32], i: usize, mask: u32) {
    buffer[i + MASK_OFFSET] = f32::from_bits(mask);
}

/// Keeps only the bits of the mask word that are also set in `mask`.
#[inline]
pub fn apply_mask_and(buffer: &mut [f32], i: usize, mask: u32) {
    let current = retrieve_mask(buffer, i);
    apply_mask(buffer, i, current & mask);
}

/// Sets the bits of `mask` in the mask word, leaving the others alone.
#[inline]
pub fn apply_mask_or(buffer: &mut [f32], i: usize, mask: u32) {
    let current = retrieve_mask(buffer, i);
    apply_mask(buffer, i, current | mask);
}

#[inline]
pub fn retrieve_is_visible(buffer: &[f32], i: usize) -> bool {
    retrieve_mask(buffer, i) & MASK_VISIBLE != 0
}

/// Sets or clears the visible bit without touching any other mask bits.
#[inline]
pub fn apply_is_visible(buffer: &mut [f32], i: usize, visible: bool) {
    if visible {
        apply_mask_or(buffer, i, MASK_VISIBLE);
    } else {
        apply_mask_and(buffer, i, MASK_ALL ^ MASK_VISIBLE);
    }
}

#[inline]
pub fn retrieve_position_x(buffer: &[f32], i: usize) -> f32 {
    buffer[i + POSITION_X_OFFSET]
}

#[inline]
pub fn retrieve_position_y(buffer: &[f32], i: usize) -> f32 {
    buffer[i + POSITION_Y_OFFSET]
}

#[inline]
pub fn retrieve_position_z(buffer: &[f32], i: usize) -> f32 {
    buffer[i + POSITION_Z_OFFSET]
}

#[inline]
pub fn apply_position_x(buffer: &mut [f32], i: usize, x: f32) {
    buffer[i + POSITION_X_OFFSET] = x;
}

#[inline]
pub fn apply_position_y(buffer: &mut [f32], i: usize, y: f32) {
    buffer[i + POSITION_Y_OFFSET] = y;
}

#[inline]
pub fn apply_position_z(buffer: &mut [f32], i: usize, z: f32) {
    buffer[i + POSITION_Z_OFFSET] = z;
}

/// Reads the position at record `i` into `out` and returns it.
#[inline]
pub fn retrieve_position<'a>(buffer: &[f32], i: usize, out: &'a mut Point3f) -> &'a mut Point3f {
    let [x, y, z] = position_slots(buffer, i);

    out.set(x, y, z)
}

#[inline]
pub fn apply_position(buffer: &mut [f32], i: usize, x: f32, y: f32, z: f32) {
    buffer[i + POSITION_X_OFFSET..=i + POSITION_Z_OFFSET].copy_from_slice(&[x, y, z]);
}

#[inline]
fn position_slots(buffer: &[f32], i: usize) -> [f32; 3] {
    [
        buffer[i + POSITION_X_OFFSET],
        buffer[i + POSITION_Y_OFFSET],
        buffer[i + POSITION_Z_OFFSET],
    ]
}

/// Reads extension slot `extension_offset` of record `i`. The caller must ensure
/// `extension_offset < extension_count`; otherwise this reads the next record.
#[inline]
pub fn retrieve_extended_component(buffer: &[f32], i: usize, extension_offset: usize) -> f32 {
    buffer[i + EXTENSION_OFFSET + extension_offset]
}

/// Writes extension slot `extension_offset` of record `i`. Same caveat as
/// `retrieve_extended_component`.
#[inline]
pub fn apply_extended_component(
    buffer: &mut [f32],
    i: usize,
    extension_offset: usize,
    value: f32,
) {
    buffer[i + EXTENSION_OFFSET + extension_offset] = value;
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
