//! Geometric primitives for collision detection: a three-component [`Vector`]
//! and a bounding [`Sphere`] built on it.
//!
//! Both types are plain `Copy` values. Arithmetic on [`Vector`] follows IEEE 754
//! rules, so dividing by zero (including normalizing a zero-length vector)
//! produces infinities or NaN rather than an error; the `try_` variants exist
//! for callers who would rather be told.
//!
//! ```
//! use cosmic_collision::math::{Sphere, Vector};
//!
//! let a = Sphere::new(Vector::ZERO, 5.0);
//! let b = Sphere::new(Vector::new(8.0, 0.0, 0.0), 5.0);
//! assert!(a.intersects(b));
//! assert_eq!(a.surface_distance(b), -2.0);
//! ```
//!
//! [`Vector`]: math::Vector
//! [`Sphere`]: math::Sphere

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

pub mod math;

pub mod util;
