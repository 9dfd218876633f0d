use crate::{Point3, Reflect, Vector3};
use serde::{Deserialize, Serialize};

/// A plane in 3D space defined by a point and unit normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    pub fn xy() -> Self {
        Self::new(Point3::ZERO, Vector3::Z)
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Reflect a direction vector across this plane.
    pub fn reflect_direction(&self, direction: Vector3) -> Vector3 {
        direction.reflect_across(self.normal)
    }

    /// Mirror image of a point through this plane.
    pub fn reflect_point(&self, point: Point3) -> Point3 {
        point - self.normal * (2.0 * self.signed_distance(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_signed_distance() {
        let plane = Plane::xy();
        assert!((plane.signed_distance(dvec3(0.0, 0.0, 5.0)) - 5.0).abs() < 1e-10);
        assert!((plane.signed_distance(dvec3(0.0, 0.0, -3.0)) + 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_new_normalizes() {
        let plane = Plane::new(Point3::ZERO, dvec3(0.0, 0.0, 4.0));
        assert!((plane.normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_point() {
        let plane = Plane::xy();
        let p = plane.reflect_point(dvec3(1.0, 2.0, 5.0));
        assert!((p - dvec3(1.0, 2.0, -5.0)).length() < 1e-10);
    }

    #[test]
    fn test_reflect_direction_flips_normal_component() {
        let plane = Plane::new(dvec3(3.0, 3.0, 3.0), dvec3(0.0, 1.0, 0.0));
        let r = plane.reflect_direction(dvec3(0.2, -0.5, 0.3));
        assert!((r - dvec3(0.2, 0.5, 0.3)).length() < 1e-12);
    }
}
