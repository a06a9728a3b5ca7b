use super::{Point2f, Point3f, PointN};

use glam::{Vec2, Vec3};

impl From<Vec2> for Point2f {
    #[inline]
    fn from(v: Vec2) -> Self {
        PointN(v.into())
    }
}

impl From<Point2f> for Vec2 {
    #[inline]
    fn from(p: Point2f) -> Self {
        p.0.into()
    }
}

impl From<Vec3> for Point3f {
    #[inline]
    fn from(v: Vec3) -> Self {
        PointN(v.into())
    }
}

impl From<Point3f> for Vec3 {
    #[inline]
    fn from(p: Point3f) -> Self {
        p.0.into()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
