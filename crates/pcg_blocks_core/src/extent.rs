use crate::{Point, Point3f, PointN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its minimum corner and its size along each axis.
pub type Extent3f = ExtentN<[f32; 3]>;

/// An axis-aligned box over `PointN<N>`. `contains` treats it as half-open, `[min, min + shape)`,
/// while `contains_closed` also accepts the upper faces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN<N> {
    pub minimum: PointN<N>,
    pub shape: PointN<N>,
}

impl<N> ExtentN<N> {
    #[inline]
    pub fn from_min_and_shape(minimum: PointN<N>, shape: PointN<N>) -> Self {
        Self { minimum, shape }
    }
}

impl<N> ExtentN<N>
where
    PointN<N>: Point,
{
    /// Panics if `least_upper_bound` is below `minimum` on any axis.
    #[inline]
    pub fn from_min_and_lub(minimum: PointN<N>, least_upper_bound: PointN<N>) -> Self {
        assert!(
            least_upper_bound >= minimum,
            "extent bounds are inverted on at least one axis"
        );

        Self::from_min_and_shape(minimum, least_upper_bound - minimum)
    }

    /// The corner opposite `minimum`.
    #[inline]
    pub fn least_upper_bound(&self) -> PointN<N> {
        self.minimum + self.shape
    }

    #[inline]
    pub fn contains(&self, p: PointN<N>) -> bool {
        self.minimum <= p && p < self.least_upper_bound()
    }

    /// Uniform samples drawn from closed per-axis ranges always land in this set.
    #[inline]
    pub fn contains_closed(&self, p: PointN<N>) -> bool {
        self.minimum <= p && p <= self.least_upper_bound()
    }

    /// Grown by `pad_amount` on every face.
    #[inline]
    pub fn padded(&self, pad_amount: f32) -> Self {
        let pad = PointN::<N>::ONES * pad_amount;

        Self::from_min_and_shape(self.minimum - pad, self.shape + pad * 2.0)
    }
}

impl Extent3f {
    /// The unit cube `[0, 1]³`.
    pub const UNIT: Self = Self {
        minimum: PointN([0.0; 3]),
        shape: PointN([1.0; 3]),
    };

    #[inline]
    pub fn volume(&self) -> f32 {
        self.shape.x() * self.shape.y() * self.shape.z()
    }

    #[inline]
    pub fn center(&self) -> Point3f {
        self.minimum + self.shape * 0.5
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

    use pretty_assertions::assert_eq;

    #[test]
    fn min_and_lub_round_trip() {
        let extent = Extent3f::from_min_and_lub(PointN([-1.0, 0.0, 2.0]), PointN([1.0, 4.0, 3.0]));

        assert_eq!(extent.shape, PointN([2.0, 4.0, 1.0]));
        assert_eq!(extent.least_upper_bound(), PointN([1.0, 4.0, 3.0]));
        assert_eq!(extent.volume(), 8.0);
        assert_eq!(extent.center(), PointN([0.0, 2.0, 2.5]));
    }

    #[test]
    fn flat_extent_is_allowed() {
        let extent = Extent3f::from_min_and_lub(PointN([0.0, 1.0, 0.0]), PointN([2.0, 1.0, 2.0]));

        assert_eq!(extent.volume(), 0.0);
        assert!(extent.contains_closed(PointN([1.0, 1.0, 1.0])));
        assert!(!extent.contains(PointN([1.0, 1.0, 1.0])));
    }

    #[test]
    #[should_panic]
    fn inverted_bounds_panic() {
        Extent3f::from_min_and_lub(PointN([1.0, 0.0, 0.0]), PointN([0.0, 1.0, 1.0]));
    }

    #[test]
    fn closed_containment_includes_upper_bound() {
        let extent = Extent3f::UNIT;

        assert!(extent.contains(PointN([0.0, 0.5, 0.99])));
        assert!(!extent.contains(PointN([1.0, 0.5, 0.5])));
        assert!(extent.contains_closed(PointN([1.0, 1.0, 1.0])));
        assert!(!extent.contains_closed(PointN([1.0, 1.1, 1.0])));
    }

    #[test]
    fn padded_grows_both_sides() {
        let extent = Extent3f::UNIT.padded(1.0);

        assert_eq!(extent.minimum, PointN([-1.0; 3]));
        assert_eq!(extent.shape, PointN([3.0; 3]));
    }
}
