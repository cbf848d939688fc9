use core::fmt;
use core::iter::Sum;
use core::ops;

use euclid::{Point3D, Vector3D};
use manyfmt::Refmt as _;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::Float as _;

use crate::util::ConciseDebug;

/// A point or direction in 3D space, with `f32` components.
///
/// Equality is exact, component by component, as for the underlying floats:
/// `-0.0` equals `0.0`, and a vector with a NaN component is not equal to itself.
///
/// Multiplying two vectors is deliberately not an operator; use [`Vector::dot()`]
/// or [`Vector::cross()`] to say which product is meant.
///
/// ```
/// use cosmic_collision::math::Vector;
///
/// let v = Vector::new(3.0, 0.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v * 2.0, Vector::new(6.0, 0.0, 8.0));
/// assert_eq!(v.to_string(), "[x=3 y=0 z=4]");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[expect(clippy::exhaustive_structs)]
#[repr(C)]
pub struct Vector {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
    /// The z coordinate.
    pub z: f32,
}

impl Vector {
    /// The zero vector, `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// The unit vector along the x axis, `(1, 0, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector along the y axis, `(0, 1, 0)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector along the z axis, `(0, 0, 1)`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the square of [`Self::length()`], which is cheaper to compute and
    /// preserves ordering.
    #[inline]
    pub fn length_squared(self) -> f32 {
        Self::dot(self, self)
    }

    /// Returns the Euclidean length of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a vector of length 1 pointing in the same direction, computed as
    /// `self / self.length()`.
    ///
    /// If the length is zero, this divides by zero and every component of the result
    /// is NaN. Use [`Self::try_normal()`] to detect that case instead.
    ///
    /// ```
    /// use cosmic_collision::math::Vector;
    ///
    /// assert_eq!(Vector::new(0.0, -4.0, 0.0).normal(), Vector::new(0.0, -1.0, 0.0));
    /// assert!(Vector::ZERO.normal().x.is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn normal(self) -> Self {
        self / self.length()
    }

    /// Like [`Self::normal()`], but returns an error instead of non-finite components
    /// when the length is zero, infinite, or NaN.
    #[inline]
    pub fn try_normal(self) -> Result<Self, ZeroLengthError> {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Ok(self / length)
        } else {
            Err(ZeroLengthError {
                vector: self,
                length,
            })
        }
    }

    /// Replaces `self` with [`self.normal()`](Self::normal), with the same
    /// handling of a zero length.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normal();
    }

    /// Returns the Euclidean distance between two points.
    ///
    /// This is symmetric and never negative. It may be called either as
    /// `Vector::distance(a, b)` or as `a.distance(b)`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Returns the cross product `self × other`.
    ///
    /// ```
    /// use cosmic_collision::math::Vector;
    ///
    /// assert_eq!(Vector::cross(Vector::UNIT_X, Vector::UNIT_Y), Vector::UNIT_Z);
    /// ```
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Returns the dot product `self · other`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Converts to a [`euclid`] vector in the given unit space.
    #[inline]
    pub fn to_euclid<U>(self) -> Vector3D<f32, U> {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Converts to a [`euclid`] point in the given unit space, treating `self` as an
    /// offset from the origin.
    #[inline]
    pub fn to_point<U>(self) -> Point3D<f32, U> {
        Point3D::new(self.x, self.y, self.z)
    }
}

/// Formats as `[x=… y=… z=…]`, using the default formatting of `f32` for each
/// component. Intended for diagnostics; there is no corresponding parser.
impl fmt::Display for Vector {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = *self;
        write!(f, "[x={x} y={y} z={z}]")
    }
}

// --- Operators -----------------------------------------------------------------------------------

impl ops::Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f32> for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl ops::Mul<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

/// Divides each component by `rhs`. Division by zero follows IEEE 754 and produces
/// infinities, or NaN for components that are themselves zero.
impl ops::Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl ops::AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl ops::MulAssign<f32> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl ops::DivAssign<f32> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Sum for Vector {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl num_traits::Zero for Vector {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl num_traits::ConstZero for Vector {
    const ZERO: Self = Self::ZERO;
}

// --- Conversions ---------------------------------------------------------------------------------

impl From<[f32; 3]> for Vector {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for [f32; 3] {
    #[inline]
    fn from(Vector { x, y, z }: Vector) -> Self {
        [x, y, z]
    }
}

impl<U> From<Vector3D<f32, U>> for Vector {
    #[inline]
    fn from(value: Vector3D<f32, U>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl<U> From<Point3D<f32, U>> for Vector {
    #[inline]
    fn from(value: Point3D<f32, U>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

// --- Errors --------------------------------------------------------------------------------------

/// Error from [`Vector::try_normal()`] when the vector has no direction to keep.
///
/// This happens when its length is zero, infinite, or NaN; the plain
/// [`Vector::normal()`] would return non-finite components in those cases.
/// [`ZeroLengthError::length()`] tells these apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroLengthError {
    vector: Vector,
    length: f32,
}

impl ZeroLengthError {
    /// The vector that could not be normalized.
    #[inline]
    pub fn vector(&self) -> Vector {
        self.vector
    }

    /// The length of [`Self::vector()`]: zero, infinite, or NaN.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }
}

impl fmt::Display for ZeroLengthError {
    #[inline(never)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot normalize {}, whose length is {}",
            self.vector.refmt(&ConciseDebug),
            self.length
        )
    }
}

impl core::error::Error for ZeroLengthError {}

#[cfg(feature = "arbitrary")]
#[mutants::skip]
#[allow(clippy::missing_inline_in_public_items)]
impl<'a> arbitrary::Arbitrary<'a> for Vector {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[f32; 3] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}
