use crate::{Point, Point3f};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ball, as stored in a sphere SDF.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Sphere3 {
    pub center: Point3f,
    pub radius: f32,
}

impl Sphere3 {
    /// `true` iff `p` is strictly inside, so points on the surface are not contained.
    #[inline]
    pub fn contains(&self, p: &Point3f) -> bool {
        p.l2_distance_squared(&self.center) < self.radius * self.radius
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
