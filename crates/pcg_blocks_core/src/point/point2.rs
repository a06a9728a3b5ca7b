use super::PointN;

/// A 2D point, usually a texture coordinate.
pub type Point2f = PointN<[f32; 2]>;

impl Point2f {
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.0 = [x, y];

        self
    }
}
