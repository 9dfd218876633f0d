use crate::{Plane, Point3, Reflect, Vector3};
use serde::{Deserialize, Serialize};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at parameter t.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// The ray leaving `plane` at this ray's origin after a mirror bounce.
    pub fn reflect_off(&self, plane: &Plane) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.direction.reflect_across(plane.normal),
        }
    }
}
