use pcg_blocks_core::{repeat_unit, Point2f, Point3f};
use pcg_blocks_storage::{component::retrieve_position, StandardPcgPoints};

use auto_impl::auto_impl;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps a world position to a texture coordinate.
///
/// Implementations must be pure: the same input always gives the same output and nothing is
/// mutated besides `out`, so one transform can be shared freely.
#[auto_impl(&, Box, Arc)]
pub trait VertexTransform {
    /// Writes the coordinate for `(x, y, z)` into `out` and returns it.
    fn transform<'a>(&self, x: f32, y: f32, z: f32, out: &'a mut Point2f) -> &'a mut Point2f;
}

/// Projects onto the XZ plane and tiles every `1 / scale` world units. `y` is ignored.
///
/// Both coordinates land in `[0, 1)`, also for negative positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Vertex32ScaledRepeatXz {
    pub scale: f32,
}

impl Vertex32ScaledRepeatXz {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// World-space length of one tile.
    #[inline]
    pub fn period(&self) -> f32 {
        1.0 / self.scale
    }
}

impl VertexTransform for Vertex32ScaledRepeatXz {
    #[inline]
    fn transform<'a>(&self, x: f32, _y: f32, z: f32, out: &'a mut Point2f) -> &'a mut Point2f {
        out.set(repeat_unit(x, self.scale), repeat_unit(z, self.scale))
    }
}

/// Replaces the contents of `out` with the transformed position of every point, hidden or not, in
/// record order. The vector's allocation is reused.
pub fn write_uvs<T>(points: &StandardPcgPoints, transform: &T, out: &mut Vec<[f32; 2]>)
where
    T: VertexTransform + ?Sized,
{
    out.clear();
    out.reserve(points.count());

    let buffer = points.values_slice();
    let mut p = Point3f::default();
    let mut uv = Point2f::default();
    for i in points.layout().records(0, buffer.len()) {
        retrieve_position(buffer, i, &mut p);
        out.push(transform.transform(p.x(), p.y(), p.z(), &mut uv).0);
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use pcg_blocks_core::prelude::*;
    use pcg_blocks_procgen::RandomizePointPositions;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use utilities::test::{seeded_rng, TEST_SEEDS};

    fn uv(transform: &dyn VertexTransform, x: f32, y: f32, z: f32) -> [f32; 2] {
        let mut out = Point2f::ZERO;

        transform.transform(x, y, z, &mut out).0
    }

    #[test]
    fn unit_scale_takes_the_fraction() {
        let t = Vertex32ScaledRepeatXz::new(1.0);

        assert_eq!(uv(&t, 1.25, 100.0, 2.5), [0.25, 0.5]);
        assert_eq!(uv(&t, 3.0, 0.0, -0.25), [0.0, 0.75]);
    }

    #[test]
    fn half_scale_tiles_every_two_units() {
        let t = Vertex32ScaledRepeatXz::new(0.5);

        assert_eq!(t.period(), 2.0);
        assert_eq!(uv(&t, 3.0, 0.0, 1.0), [0.5, 0.5]);
        assert_eq!(uv(&t, 3.0, 0.0, 1.0), uv(&t, 3.0 + t.period(), 0.0, 1.0 - t.period()));
    }

    #[test]
    fn y_is_ignored() {
        let t = Vertex32ScaledRepeatXz::new(0.3);

        assert_eq!(uv(&t, 1.7, -50.0, 4.2), uv(&t, 1.7, 1.0e6, 4.2));
    }

    #[test]
    fn always_in_unit_square() {
        let t = Vertex32ScaledRepeatXz::new(0.37);
        let bounds = Extent3f::from_min_and_shape(Point3f::fill(-100.0), Point3f::fill(200.0));

        for &seed in TEST_SEEDS.iter() {
            let mut points = StandardPcgPoints::new(200);
            points.process(&mut RandomizePointPositions::new(seeded_rng(seed), bounds));

            let mut uvs = Vec::new();
            write_uvs(&points, &t, &mut uvs);
            for &[u, v] in uvs.iter() {
                assert!((0.0..1.0).contains(&u), "seed {}: u = {}", seed, u);
                assert!((0.0..1.0).contains(&v), "seed {}: v = {}", seed, v);
            }
        }
    }

    #[test]
    fn output_is_returned_and_written() {
        let t = Vertex32ScaledRepeatXz::new(1.0);
        let mut out = Point2f::fill(9.0);
        let returned = *t.transform(0.5, 0.0, 0.25, &mut out);

        assert_eq!(returned, out);
        assert_eq!(out, PointN([0.5, 0.25]));
    }

    #[test]
    fn write_uvs_replaces_contents_in_record_order() {
        let mut points = StandardPcgPoints::with_extensions(3, 2);
        points.set_position(0, 0.5, 0.0, 0.5);
        points.set_position(1, -0.5, 0.0, 1.25);
        points.set_position(2, 2.0, 0.0, 2.75);

        let mut uvs = vec![[7.0, 7.0]; 10];
        write_uvs(&points, &Vertex32ScaledRepeatXz::new(1.0), &mut uvs);

        assert_eq!(uvs, vec![[0.5, 0.5], [0.5, 0.25], [0.0, 0.75]]);
    }

    #[test]
    fn wrapped_transforms_agree() {
        let t = Vertex32ScaledRepeatXz::new(0.25);
        let boxed: Box<dyn VertexTransform> = Box::new(t);
        let shared = Arc::new(t);

        assert_eq!(uv(&boxed, 5.0, 0.0, -3.0), uv(&t, 5.0, 0.0, -3.0));
        assert_eq!(uv(&shared, 5.0, 0.0, -3.0), uv(&t, 5.0, 0.0, -3.0));
        assert_eq!(uv(&&t, 5.0, 0.0, -3.0), [0.25, 0.25]);
    }
}
