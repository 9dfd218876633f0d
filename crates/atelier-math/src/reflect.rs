//! Mirror reflection shared by the planar and spatial variants.

use std::ops::{Mul, Sub};

use crate::{DVec2, DVec3};

/// A vector that can be reflected across a unit normal.
///
/// Implemented for both `DVec2` and `DVec3` so the planar and spatial
/// reflection paths run the same formula: `r = d - 2 (d . n) n`.
pub trait Reflect: Copy + Sub<Output = Self> + Mul<f64, Output = Self> {
    fn inner(self, other: Self) -> f64;

    /// Reflect `self` across the plane (or line) with unit normal `normal`.
    fn reflect_across(self, normal: Self) -> Self {
        self - normal * (2.0 * self.inner(normal))
    }
}

impl Reflect for DVec2 {
    fn inner(self, other: Self) -> f64 {
        self.dot(other)
    }
}

impl Reflect for DVec3 {
    fn inner(self, other: Self) -> f64 {
        self.dot(other)
    }
}
