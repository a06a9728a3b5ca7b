/// The fractional part of `x`, always in `[0, 1)`.
///
/// `f32::fract` keeps the sign of its input, so `-0.25` would map to `-0.25`. This wraps it to
/// `0.75` instead, which is what tiling texture coordinates need.
#[inline]
pub fn positive_fract(x: f32) -> f32 {
    let f = x - x.floor();

    // Tiny negative inputs round up to exactly 1.0.
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Maps `x` into a unit interval that repeats every `1 / scale` units.
#[inline]
pub fn repeat_unit(x: f32, scale: f32) -> f32 {
    positive_fract(x * scale)
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
    fn fract_positive_inputs() {
        assert_eq!(positive_fract(0.0), 0.0);
        assert_eq!(positive_fract(0.5), 0.5);
        assert_eq!(positive_fract(1.0), 0.0);
        assert_eq!(positive_fract(3.25), 0.25);
    }

    #[test]
    fn fract_negative_inputs() {
        assert_eq!(positive_fract(-0.25), 0.75);
        assert_eq!(positive_fract(-1.0), 0.0);
        assert_eq!(positive_fract(-2.5), 0.5);

        let tiny = positive_fract(-1.0e-9);
        assert!((0.0..1.0).contains(&tiny));
    }

    #[test]
    fn repeat_has_period_of_inverse_scale() {
        assert_eq!(repeat_unit(0.5, 0.5), 0.25);
        assert_eq!(repeat_unit(2.5, 0.5), 0.25);
        assert_eq!(repeat_unit(-1.5, 0.5), 0.25);
    }
}
