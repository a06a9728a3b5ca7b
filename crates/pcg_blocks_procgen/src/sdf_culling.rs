use pcg_blocks_core::prelude::*;
use pcg_blocks_storage::{
    component::{apply_is_visible, retrieve_position},
    PointLayout, PointProcessor, StandardPcgSdf,
};

/// Clears the visible bit of every point whose distance estimate from `sdf` is at most `threshold`.
///
/// Only the visible bit changes. Points that are already hidden stay hidden, and points outside the
/// threshold are not made visible again.
#[derive(Clone, Copy, Debug)]
pub struct HidePointsInsideSdf<'a> {
    sdf: &'a StandardPcgSdf,
    threshold: f32,
}

impl<'a> HidePointsInsideSdf<'a> {
    pub fn new(sdf: &'a StandardPcgSdf, threshold: f32) -> Self {
        Self { sdf, threshold }
    }
}

impl PointProcessor for HidePointsInsideSdf<'_> {
    fn process(&mut self, layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize) {
        let mut p = Point3f::ZERO;
        for i in layout.records(start, end) {
            if self.sdf.get_min_point(retrieve_position(buffer, i, &mut p)) <= self.threshold {
                apply_is_visible(buffer, i, false);
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
