//! Vectors, spheres, and the queries between them.

mod sphere;
pub use sphere::*;
mod vector;
pub use vector::*;
#[cfg(feature = "serde")]
mod serde_impls;

/// Replaces a negative, negative-zero, or NaN radius with positive zero.
///
/// Positive infinity passes through.
#[inline]
pub(crate) fn clamp_radius(radius: f32) -> f32 {
    // `>` is false for NaN and for both zeroes, which all land on `+0.0`.
    if radius > 0.0 { radius } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_radius_cases() {
        assert_eq!(clamp_radius(2.5), 2.5);
        assert_eq!(clamp_radius(-5.0), 0.0);
        assert!(clamp_radius(-0.0).is_sign_positive());
        assert!(clamp_radius(f32::NAN).is_sign_positive());
        assert_eq!(clamp_radius(f32::NAN), 0.0);
        assert_eq!(clamp_radius(f32::INFINITY), f32::INFINITY);
        assert_eq!(clamp_radius(f32::NEG_INFINITY), 0.0);
    }
}
