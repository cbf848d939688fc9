use core::fmt;

use manyfmt::Refmt as _;

use crate::math::{Vector, clamp_radius};
use crate::util::ConciseDebug;

/// A bounding sphere: a center point and a radius.
///
/// The radius is never negative. Every way of setting it, including [`Sphere::new()`],
/// replaces a negative or NaN value with zero; [`Sphere::try_new()`] reports such
/// values instead.
///
/// A sphere whose radius is zero is treated as intersecting nothing; see
/// [`Sphere::intersects()`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere {
    center: Vector,
    /// Invariant: `radius >= 0.0`, not NaN, and not negative zero.
    radius: f32,
}

impl Sphere {
    /// The sphere of radius zero centered on the origin. Equal to [`Sphere::default()`].
    pub const ZERO: Self = Self {
        center: Vector::ZERO,
        radius: 0.0,
    };

    /// Constructs a sphere from its center and radius.
    ///
    /// If `radius` is negative or NaN, it is replaced with zero.
    ///
    /// ```
    /// use cosmic_collision::math::{Sphere, Vector};
    ///
    /// assert_eq!(Sphere::new(Vector::ZERO, 2.0).radius(), 2.0);
    /// assert_eq!(Sphere::new(Vector::ZERO, -5.0).radius(), 0.0);
    /// ```
    #[inline]
    pub fn new(center: Vector, radius: f32) -> Self {
        Self {
            center,
            radius: checked_radius(center, radius),
        }
    }

    /// Constructs a sphere from its center and radius, returning an error instead of
    /// clamping if `radius` is negative or NaN.
    ///
    /// Negative zero is accepted, and stored as positive zero.
    #[inline]
    pub fn try_new(center: Vector, radius: f32) -> Result<Self, InvalidRadiusError> {
        if radius >= 0.0 {
            Ok(Self {
                center,
                radius: clamp_radius(radius),
            })
        } else {
            Err(InvalidRadiusError { radius })
        }
    }

    /// Constructs the sphere centered on `center` whose surface passes through
    /// `point_on_surface`.
    ///
    /// ```
    /// use cosmic_collision::math::{Sphere, Vector};
    ///
    /// let sphere = Sphere::from_surface_point(Vector::ZERO, Vector::new(0.0, 3.0, 4.0));
    /// assert_eq!(sphere.radius(), 5.0);
    /// ```
    #[inline]
    pub fn from_surface_point(center: Vector, point_on_surface: Vector) -> Self {
        Self::new(center, Vector::distance(center, point_on_surface))
    }

    /// Returns the center of the sphere.
    #[inline]
    pub const fn center(self) -> Vector {
        self.center
    }

    /// Moves the sphere so that it is centered on `center`.
    #[inline]
    pub fn set_center(&mut self, center: Vector) {
        self.center = center;
    }

    /// Returns the radius of the sphere, which is always zero or positive.
    #[inline]
    pub const fn radius(self) -> f32 {
        self.radius
    }

    /// Sets the radius of the sphere, replacing a negative or NaN value with zero.
    #[inline]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = checked_radius(self.center, radius);
    }

    /// Returns whether this sphere overlaps `other`.
    ///
    /// This is true when the distance between the centers is strictly less than the
    /// sum of the radii, so spheres which merely touch do not intersect. If the radius
    /// of `self` is zero, the answer is always `false`; the radius of `other` is not
    /// checked in the same way, so the relation is not symmetric when only one of the
    /// spheres has zero radius.
    ///
    /// ```
    /// use cosmic_collision::math::{Sphere, Vector};
    ///
    /// let a = Sphere::new(Vector::ZERO, 5.0);
    /// assert!(a.intersects(Sphere::new(Vector::new(8.0, 0.0, 0.0), 5.0)));
    /// assert!(!a.intersects(Sphere::new(Vector::new(11.0, 0.0, 0.0), 5.0)));
    /// ```
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.radius > 0.0
            && Vector::distance(self.center, other.center) < self.radius + other.radius
    }

    /// Returns the distance between the surface of this sphere and the surface of
    /// `other`: the distance between the centers minus both radii.
    ///
    /// The result is negative when the spheres overlap, and it is the depth of that
    /// overlap.
    #[inline]
    pub fn surface_distance(self, other: Self) -> f32 {
        Vector::distance(self.center, other.center) - (self.radius + other.radius)
    }

    /// Returns whether `point` is inside the sphere or on its surface.
    #[inline]
    pub fn contains_point(self, point: Vector) -> bool {
        Vector::distance(self.center, point) <= self.radius
    }

    /// Translate this sphere by the specified offset. The radius is unchanged.
    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vector) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }
}

/// Checks whether two spheres overlap, with the same rule as [`Sphere::intersects()`]:
/// `first` must have a nonzero radius.
///
/// ```
/// use cosmic_collision::math::{Sphere, Vector, intersects};
///
/// let point_like = Sphere::new(Vector::ZERO, 0.0);
/// let big = Sphere::new(Vector::ZERO, 10.0);
/// assert!(!intersects(point_like, big));
/// assert!(intersects(big, point_like));
/// ```
#[inline]
pub fn intersects(first: Sphere, second: Sphere) -> bool {
    first.intersects(second)
}

/// Returns the signed distance between the surfaces of two spheres; equivalent to
/// [`first.surface_distance(second)`](Sphere::surface_distance).
#[inline]
pub fn surface_distance(first: Sphere, second: Sphere) -> f32 {
    first.surface_distance(second)
}

impl fmt::Display for Sphere {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ c: {}, r: {} }}", self.center, self.radius)
    }
}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
#[allow(clippy::missing_inline_in_public_items)]
impl<'a> arbitrary::Arbitrary<'a> for Sphere {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 4] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

// --- Errors --------------------------------------------------------------------------------------

/// Error from [`Sphere::try_new()`] when the radius is negative or NaN.
#[derive(Clone, Copy, Debug, displaydoc::Display, PartialEq)]
#[displaydoc("sphere radius must be zero or positive, not {radius}")]
pub struct InvalidRadiusError {
    radius: f32,
}

impl InvalidRadiusError {
    /// The rejected radius.
    #[inline]
    pub fn radius(self) -> f32 {
        self.radius
    }
}

impl core::error::Error for InvalidRadiusError {}

/// Applies [`clamp_radius`], logging when that changed the value meaningfully.
fn checked_radius(center: Vector, radius: f32) -> f32 {
    if radius < 0.0 || radius.is_nan() {
        log::trace!(
            "sphere at {} given radius {radius}; using zero",
            center.refmt(&ConciseDebug)
        );
    }
    clamp_radius(radius)
}
