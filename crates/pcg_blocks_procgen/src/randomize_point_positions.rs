use pcg_blocks_core::prelude::*;
use pcg_blocks_storage::{
    component::{apply_mask, apply_position},
    PointLayout, PointProcessor, MASK_VISIBLE,
};

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Scatters points uniformly inside a bounding volume and marks them visible.
///
/// Each coordinate is drawn independently from the closed interval `[min, max]` between the
/// extent's minimum and least upper bound on that axis. This differs from a half-open `[min, max)`
/// sampler: the upper faces are reachable, so generated points satisfy `Extent3f::contains_closed`
/// but not always `Extent3f::contains`. A zero-length axis is allowed and pins that coordinate.
///
/// The mask word is *overwritten* with exactly `MASK_VISIBLE`, dropping any bits an earlier pass
/// set. Run this first; later passes that must keep other bits should go through
/// `apply_mask_or`/`apply_mask_and`.
pub struct RandomizePointPositions<R> {
    rng: R,
    x: Uniform<f32>,
    y: Uniform<f32>,
    z: Uniform<f32>,
}

impl<R> RandomizePointPositions<R>
where
    R: Rng,
{
    /// Panics if `bounds` has a negative shape on any axis.
    pub fn new(rng: R, bounds: Extent3f) -> Self {
        let min = bounds.minimum;
        let max = bounds.least_upper_bound();

        Self {
            rng,
            x: Uniform::new_inclusive(min.x(), max.x()),
            y: Uniform::new_inclusive(min.y(), max.y()),
            z: Uniform::new_inclusive(min.z(), max.z()),
        }
    }
}

impl<R> PointProcessor for RandomizePointPositions<R>
where
    R: Rng,
{
    fn process(&mut self, layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            points = (end - start) / layout.component_size(),
            "randomizing point positions"
        );

        for i in layout.records(start, end) {
            let x = self.x.sample(&mut self.rng);
            let y = self.y.sample(&mut self.rng);
            let z = self.z.sample(&mut self.rng);
            apply_position(buffer, i, x, y, z);
            apply_mask(buffer, i, MASK_VISIBLE);
        }
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

    use pcg_blocks_storage::{
        component::{apply_extended_component, retrieve_extended_component},
        StandardPcgPoints,
    };
    use pretty_assertions::assert_eq;
    use utilities::test::{seeded_rng, TEST_SEEDS};

    #[test]
    fn two_points_in_unit_cube() {
        let mut points = StandardPcgPoints::new(2);
        let mut randomize = RandomizePointPositions::new(seeded_rng(12345), Extent3f::UNIT);
        points.process(&mut randomize);

        let mut p = Point3f::ZERO;
        for index in 0..2 {
            assert!(Extent3f::UNIT.contains_closed(*points.position(index, &mut p)));
        }
        assert_eq!(points.mask(0), 1);
        assert_eq!(points.mask(1), 1);
    }

    #[test]
    fn positions_stay_in_bounds_for_all_seeds() {
        let bounds = Extent3f::from_min_and_shape(PointN([-5.0, 10.0, 0.0]), PointN([2.0, 0.5, 100.0]));
        for &seed in TEST_SEEDS.iter() {
            let mut points = StandardPcgPoints::with_extensions(500, 3);
            points.process(&mut RandomizePointPositions::new(seeded_rng(seed), bounds));

            let mut p = Point3f::ZERO;
            for index in 0..points.count() {
                points.position(index, &mut p);
                assert!(bounds.contains_closed(p), "seed {}: {:?} escaped", seed, p);
                assert!(points.is_visible(index));
            }
            assert_eq!(points.visible_count(), 500);
        }
    }

    #[test]
    fn mask_is_overwritten_not_merged() {
        let mut points = StandardPcgPoints::new(3);
        points.process(&mut |layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize| {
            for i in layout.records(start, end) {
                apply_mask(buffer, i, 0b1110);
            }
        });
        points.process(&mut RandomizePointPositions::new(seeded_rng(0), Extent3f::UNIT));

        for index in 0..3 {
            assert_eq!(points.mask(index), MASK_VISIBLE);
        }
    }

    #[test]
    fn extension_payload_is_untouched() {
        let mut points = StandardPcgPoints::with_extensions(4, 2);
        points.process(&mut |layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize| {
            for i in layout.records(start, end) {
                apply_extended_component(buffer, i, 1, -3.0);
            }
        });
        points.process(&mut RandomizePointPositions::new(seeded_rng(0), Extent3f::UNIT));

        let stride = points.component_size();
        for i in (0..points.values_slice().len()).step_by(stride) {
            assert_eq!(retrieve_extended_component(points.values_slice(), i, 0), 0.0);
            assert_eq!(retrieve_extended_component(points.values_slice(), i, 1), -3.0);
        }
    }

    #[test]
    fn sub_range_leaves_other_points_alone() {
        let mut points = StandardPcgPoints::new(4);
        let mut randomize = RandomizePointPositions::new(seeded_rng(3), Extent3f::UNIT.padded(1.0));
        points.process_range(&mut randomize, 4, 12);

        assert_eq!(points.mask(0), 0);
        assert_eq!(points.mask(1), MASK_VISIBLE);
        assert_eq!(points.mask(2), MASK_VISIBLE);
        assert_eq!(points.mask(3), 0);
        assert_eq!(&points.values_slice()[..4], &[0.0; 4]);
        assert_eq!(&points.values_slice()[12..], &[0.0; 4]);
    }

    #[test]
    fn same_seed_same_points() {
        let bounds = Extent3f::UNIT.padded(10.0);
        let mut a = StandardPcgPoints::new(64);
        let mut b = StandardPcgPoints::new(64);
        a.process(&mut RandomizePointPositions::new(seeded_rng(9), bounds));
        b.process(&mut RandomizePointPositions::new(seeded_rng(9), bounds));

        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_bounds_pin_the_axis() {
        let bounds = Extent3f::from_min_and_shape(PointN([2.0, 0.0, 0.0]), PointN([0.0, 1.0, 1.0]));
        let mut points = StandardPcgPoints::new(16);
        points.process(&mut RandomizePointPositions::new(seeded_rng(1), bounds));

        let mut p = Point3f::ZERO;
        for index in 0..16 {
            assert_eq!(points.position(index, &mut p).x(), 2.0);
        }
    }
}
