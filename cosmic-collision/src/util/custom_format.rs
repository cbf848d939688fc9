#![allow(clippy::missing_inline_in_public_items)]

use core::fmt;

use manyfmt::{Fmt, Refmt as _};

use crate::math::{Sphere, Vector};

/// Format type for [`manyfmt::Fmt`] which is similar to [`fmt::Debug`], but uses an
/// alternate concise format.
///
/// This format is always on one line and rounds to three decimal places, so it is
/// suited to log messages rather than to reproducing a value exactly.
///
/// ```
/// use cosmic_collision::math::Vector;
/// use cosmic_collision::util::ConciseDebug;
/// use manyfmt::Refmt as _;
///
/// let text = format!("{}", Vector::new(1.0, -0.25, 100.0).refmt(&ConciseDebug));
/// assert_eq!(text, "(+1.000, -0.250, +100.000)");
/// ```
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

impl<T: Fmt<ConciseDebug>, const N: usize> Fmt<ConciseDebug> for [T; N] {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        fmt.debug_list().entries(self.iter().map(|item| item.refmt(fopt))).finish()
    }
}

impl Fmt<ConciseDebug> for Vector {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "({:+.3?}, {:+.3?}, {:+.3?})", self.x, self.y, self.z)
    }
}

impl Fmt<ConciseDebug> for Sphere {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        write!(
            fmt,
            "{} r {:.3?}",
            self.center().refmt(fopt),
            self.radius()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::string::ToString as _;

    #[test]
    fn sphere_concise() {
        let sphere = Sphere::new(Vector::new(1.0, 2.0, -3.0), 0.5);
        assert_eq!(
            sphere.refmt(&ConciseDebug).to_string(),
            "(+1.000, +2.000, -3.000) r 0.500"
        );
    }

    #[test]
    fn array_of_vectors() {
        let points = [Vector::UNIT_X, Vector::UNIT_Y];
        assert_eq!(
            points.refmt(&ConciseDebug).to_string(),
            "[(+1.000, +0.000, +0.000), (+0.000, +1.000, +0.000)]"
        );
    }
}
