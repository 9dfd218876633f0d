//! Mirror description.

use atelier_core::{error::check_range, Result, Validate};
use atelier_math::Point3;
use serde::{Deserialize, Serialize};

/// One reflective plane and the ray arriving at it.
///
/// Angles are in degrees. A spec is built per evaluation and never mutated
/// by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorSpec {
    /// Point where the ray meets the mirror
    pub position: Point3,
    /// Rotation of the mirror in the horizontal plane
    pub plane_orientation_xy: f64,
    /// Tilt of the mirror out of the horizontal plane
    pub plane_orientation_z: f64,
    /// Azimuth of the incoming ray
    pub incident_angle_xy: f64,
    /// Elevation of the incoming ray
    pub incident_angle_z: f64,
}

impl MirrorSpec {
    pub const POSITION_LIMIT: f64 = 5.0;
    pub const ORIENTATION_LIMIT: f64 = 90.0;
    pub const AZIMUTH_LIMIT: f64 = 180.0;
    pub const ELEVATION_LIMIT: f64 = 90.0;
    pub const DEFAULT_INCIDENT_AZIMUTH: f64 = 45.0;

    /// An untilted mirror at `position` hit by a horizontal ray at 45°.
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            plane_orientation_xy: 0.0,
            plane_orientation_z: 0.0,
            incident_angle_xy: Self::DEFAULT_INCIDENT_AZIMUTH,
            incident_angle_z: 0.0,
        }
    }

    pub fn with_orientation(mut self, xy: f64, z: f64) -> Self {
        self.plane_orientation_xy = xy;
        self.plane_orientation_z = z;
        self
    }

    pub fn with_incidence(mut self, xy: f64, z: f64) -> Self {
        self.incident_angle_xy = xy;
        self.incident_angle_z = z;
        self
    }
}

impl Default for MirrorSpec {
    fn default() -> Self {
        Self::new(Point3::ZERO)
    }
}

impl Validate for MirrorSpec {
    fn validate(&self) -> Result<()> {
        let p = Self::POSITION_LIMIT;
        check_range("position.x", self.position.x, -p, p)?;
        check_range("position.y", self.position.y, -p, p)?;
        check_range("position.z", self.position.z, -p, p)?;

        let o = Self::ORIENTATION_LIMIT;
        check_range("plane_orientation_xy", self.plane_orientation_xy, -o, o)?;
        check_range("plane_orientation_z", self.plane_orientation_z, -o, o)?;

        let a = Self::AZIMUTH_LIMIT;
        let e = Self::ELEVATION_LIMIT;
        check_range("incident_angle_xy", self.incident_angle_xy, -a, a)?;
        check_range("incident_angle_z", self.incident_angle_z, -e, e)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::AtelierError;
    use atelier_math::DVec3;

    #[test]
    fn test_default_mirror() {
        let m = MirrorSpec::default();
        assert_eq!(m.position, DVec3::ZERO);
        assert_eq!(m.incident_angle_xy, 45.0);
        assert_eq!(m.plane_orientation_xy, 0.0);
        m.validate().unwrap();
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let m = MirrorSpec::new(DVec3::new(5.0, -5.0, 5.0))
            .with_orientation(-90.0, 90.0)
            .with_incidence(180.0, -90.0);
        m.validate().unwrap();
    }

    #[test]
    fn test_position_out_of_range() {
        let m = MirrorSpec::new(DVec3::new(0.0, 5.5, 0.0));
        match m.validate() {
            Err(AtelierError::InvalidArgument(msg)) => assert!(msg.contains("position.y")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_angles_out_of_range() {
        assert!(MirrorSpec::default().with_orientation(91.0, 0.0).validate().is_err());
        assert!(MirrorSpec::default().with_orientation(0.0, -91.0).validate().is_err());
        assert!(MirrorSpec::default().with_incidence(-181.0, 0.0).validate().is_err());
        assert!(MirrorSpec::default().with_incidence(0.0, 90.5).validate().is_err());
    }
}
