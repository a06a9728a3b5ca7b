use super::{Point2f, Point3f, PointN};

impl From<mint::Point3<f32>> for Point3f {
    #[inline]
    fn from(p: mint::Point3<f32>) -> Self {
        PointN(p.into())
    }
}

impl From<Point3f> for mint::Point3<f32> {
    #[inline]
    fn from(p: Point3f) -> Self {
        p.0.into()
    }
}

impl From<mint::Vector3<f32>> for Point3f {
    #[inline]
    fn from(v: mint::Vector3<f32>) -> Self {
        PointN(v.into())
    }
}

impl From<mint::Vector2<f32>> for Point2f {
    #[inline]
    fn from(v: mint::Vector2<f32>) -> Self {
        PointN(v.into())
    }
}

impl From<Point2f> for mint::Vector2<f32> {
    #[inline]
    fn from(p: Point2f) -> Self {
        p.0.into()
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

    #[test]
    fn point3_keeps_component_order() {
        let p = PointN([1.0, -2.0, 3.5]);
        let m = mint::Point3::from(p);

        assert_eq!((m.x, m.y, m.z), (1.0, -2.0, 3.5));
        assert_eq!(Point3f::from(m), p);
    }

    #[test]
    fn vector3_converts_to_point() {
        let v = mint::Vector3 {
            x: 4.0,
            y: 5.0,
            z: 6.0,
        };

        assert_eq!(Point3f::from(v), PointN([4.0, 5.0, 6.0]));
    }

    #[test]
    fn vector2_keeps_component_order() {
        let p = PointN([0.25, 0.75]);
        let m = mint::Vector2::from(p);

        assert_eq!((m.x, m.y), (0.25, 0.75));
        assert_eq!(Point2f::from(m), p);
    }
}
