mod point2;
mod point3;

#[cfg(feature = "glam")]
mod glam_conversions;
#[cfg(feature = "mint")]
mod mint_conversions;

pub use point2::Point2f;
pub use point3::Point3f;

use core::ops::{Add, Mul, Sub};
use num::Zero;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point (or vector) of `f32` components, stored as the primitive array `N`.
///
/// Only `Point2f` and `Point3f` are used in practice. Both are plain arrays in memory, so slices of
/// them can be cast to and from `&[f32]` with `bytemuck`.
///
/// ```
/// use pcg_blocks_core::prelude::*;
///
/// let a = PointN([1.0, 2.0, 3.0]);
/// let b = Point3f::fill(1.0);
///
/// assert_eq!(a - b, PointN([0.0, 1.0, 2.0]));
/// assert_eq!((a + b) * 0.5, PointN([1.0, 1.5, 2.0]));
/// assert_eq!(a.dot(&b), 6.0);
/// ```
///
/// The order is the component-wise partial order, so `a < b` only when every component of `a` is
/// less than the matching component of `b`. That is what extent containment is built on.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(transparent)]
pub struct PointN<N>(pub N);

/// The float vector operations the stores and generators need.
pub trait Point:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> + PartialOrd
{
    const ZERO: Self;
    const ONES: Self;

    fn fill(value: f32) -> Self;

    fn map_components(&self, f: impl Fn(f32) -> f32) -> Self;

    fn dot(&self, other: &Self) -> f32;

    #[inline]
    fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    #[inline]
    fn l2_distance_squared(&self, other: &Self) -> f32 {
        (*self - *other).norm_squared()
    }
}

impl<const D: usize> Point for PointN<[f32; D]> {
    const ZERO: Self = PointN([0.0; D]);
    const ONES: Self = PointN([1.0; D]);

    #[inline]
    fn fill(value: f32) -> Self {
        PointN([value; D])
    }

    #[inline]
    fn map_components(&self, f: impl Fn(f32) -> f32) -> Self {
        let mut out = *self;
        for c in out.0.iter_mut() {
            *c = f(*c);
        }

        out
    }

    #[inline]
    fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }
}

impl<const D: usize> PointN<[f32; D]> {
    #[inline]
    fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut out = self;
        for (a, b) in out.0.iter_mut().zip(other.0.iter()) {
            *a = f(*a, *b);
        }

        out
    }

    #[inline]
    fn all(&self, other: &Self, f: impl Fn(f32, f32) -> bool) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| f(*a, *b))
    }
}

impl<const D: usize> Add for PointN<[f32; D]> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const D: usize> Sub for PointN<[f32; D]> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const D: usize> Mul<f32> for PointN<[f32; D]> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map_components(|c| c * rhs)
    }
}

impl<const D: usize> PartialOrd for PointN<[f32; D]> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.all(other, |a, b| a < b)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.all(other, |a, b| a > b)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.all(other, |a, b| a <= b)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.all(other, |a, b| a >= b)
    }
}

impl<const D: usize> Zero for PointN<[f32; D]> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

unsafe impl<const D: usize> bytemuck::Zeroable for PointN<[f32; D]> {}
unsafe impl<const D: usize> bytemuck::Pod for PointN<[f32; D]> {}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
