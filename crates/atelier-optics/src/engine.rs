//! Reflection of an incident ray off a single mirror.
//!
//! The spatial and planar variants share one formula through
//! [`Reflect`]: `r = i - 2 (i . n) n` with a unit normal `n`.

use atelier_core::{
    error::{check_positive, check_range},
    AtelierError, Result, Tolerance, Validate,
};
use atelier_math::{
    direction_2d, direction_from_angles, normal_2d, normal_from_angles, Plane, Point2, Point3,
    Ray, Reflect,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::mirror::MirrorSpec;

/// Incident and reflected ray endpoints for one mirror.
///
/// `position` is the mirror position the rays start from; the unit
/// directions are kept alongside the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayPair<P = Point3> {
    pub position: P,
    pub incident_endpoint: P,
    pub reflected_endpoint: P,
    pub incident_direction: P,
    pub reflected_direction: P,
    pub normal: P,
}

/// Planar ray pair produced by [`compute_reflection_2d`].
pub type RayPair2 = RayPair<Point2>;

/// Reject a mirror normal too short to normalize.
fn check_normal_length(length: f64) -> Result<()> {
    if Tolerance::default().is_zero(length) {
        return Err(AtelierError::Geometry("mirror normal has zero length".into()));
    }
    Ok(())
}

/// Reflect the ray described by `mirror` and extend both rays by `ray_length`.
///
/// Fails with `InvalidArgument` if any field of `mirror` is outside its
/// documented range or `ray_length` is not strictly positive.
pub fn compute_reflection(mirror: &MirrorSpec, ray_length: f64) -> Result<RayPair> {
    mirror.validate()?;
    check_positive("ray_length", ray_length)?;

    let incident = Ray::new(
        mirror.position,
        direction_from_angles(mirror.incident_angle_xy, mirror.incident_angle_z),
    );
    let normal = normal_from_angles(mirror.plane_orientation_xy, mirror.plane_orientation_z);
    check_normal_length(normal.length())?;
    let surface = Plane::new(mirror.position, normal);
    let reflected = incident.reflect_off(&surface);

    debug!(
        "mirror at {:?}: incident {:?} normal {:?} reflected {:?}",
        mirror.position, incident.direction, surface.normal, reflected.direction
    );

    Ok(RayPair {
        position: mirror.position,
        incident_endpoint: incident.at(ray_length),
        reflected_endpoint: reflected.at(ray_length),
        incident_direction: incident.direction,
        reflected_direction: reflected.direction,
        normal: surface.normal,
    })
}

/// Planar variant: a mirror line rotated by `mirror_angle` hit by a ray
/// travelling at `incident_angle`, both in degrees.
pub fn compute_reflection_2d(
    position: Point2,
    mirror_angle: f64,
    incident_angle: f64,
    ray_length: f64,
) -> Result<RayPair2> {
    let p = MirrorSpec::POSITION_LIMIT;
    check_range("position.x", position.x, -p, p)?;
    check_range("position.y", position.y, -p, p)?;
    let o = MirrorSpec::ORIENTATION_LIMIT;
    check_range("mirror_angle", mirror_angle, -o, o)?;
    let a = MirrorSpec::AZIMUTH_LIMIT;
    check_range("incident_angle", incident_angle, -a, a)?;
    check_positive("ray_length", ray_length)?;

    let incident = direction_2d(incident_angle);
    let normal = normal_2d(mirror_angle);
    check_normal_length(normal.length())?;
    let normal = normal.normalize();
    let reflected = incident.reflect_across(normal);

    Ok(RayPair {
        position,
        incident_endpoint: position + incident * ray_length,
        reflected_endpoint: position + reflected * ray_length,
        incident_direction: incident,
        reflected_direction: reflected,
        normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use atelier_math::{DVec2, DVec3};
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_reference_mirror_at_origin() {
        let pair = compute_reflection(&MirrorSpec::default(), 2.0).unwrap();

        assert_relative_eq!(pair.incident_direction.x, FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(pair.incident_direction.y, FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(pair.normal.y, -1.0, epsilon = 1e-9);
        assert_relative_eq!(pair.reflected_direction.x, FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(pair.reflected_direction.y, -FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(pair.reflected_endpoint.x, 1.4142, epsilon = 1e-4);
        assert_relative_eq!(pair.reflected_endpoint.y, -1.4142, epsilon = 1e-4);
        assert_relative_eq!(pair.reflected_endpoint.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(pair.incident_endpoint.x, 1.4142, epsilon = 1e-4);
        assert_relative_eq!(pair.incident_endpoint.y, 1.4142, epsilon = 1e-4);
    }

    #[test]
    fn test_endpoints_offset_from_position() {
        let mirror = MirrorSpec::new(DVec3::new(1.0, -2.0, 0.5));
        let pair = compute_reflection(&mirror, 2.0).unwrap();
        assert_eq!(pair.position, mirror.position);
        let incident_len = (pair.incident_endpoint - mirror.position).length();
        let reflected_len = (pair.reflected_endpoint - mirror.position).length();
        assert_relative_eq!(incident_len, 2.0, epsilon = 1e-9);
        assert_relative_eq!(reflected_len, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tilted_mirror_reflects_vertical_component() {
        // Mirror lying flat, normal +Z: a descending ray comes back up.
        let mirror = MirrorSpec::default()
            .with_orientation(0.0, 90.0)
            .with_incidence(0.0, -30.0);
        let pair = compute_reflection(&mirror, 1.0).unwrap();
        assert_relative_eq!(pair.normal.z, 1.0, epsilon = 1e-9);
        assert_relative_eq!(pair.reflected_direction.z, 0.5, epsilon = 1e-9);
        assert_relative_eq!(
            pair.reflected_direction.x,
            pair.incident_direction.x,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rejects_non_positive_ray_length() {
        let mirror = MirrorSpec::default();
        assert!(matches!(
            compute_reflection(&mirror, 0.0),
            Err(AtelierError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_reflection(&mirror, -2.0),
            Err(AtelierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_mirror() {
        let mirror = MirrorSpec::default().with_incidence(200.0, 0.0);
        assert!(matches!(
            compute_reflection(&mirror, 2.0),
            Err(AtelierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_planar_matches_spatial_reference() {
        let pair = compute_reflection_2d(DVec2::ZERO, 0.0, 45.0, 2.0).unwrap();
        assert_relative_eq!(pair.reflected_endpoint.x, 1.4142, epsilon = 1e-4);
        assert_relative_eq!(pair.reflected_endpoint.y, -1.4142, epsilon = 1e-4);

        let mirror = MirrorSpec::default()
            .with_orientation(30.0, 0.0)
            .with_incidence(-60.0, 0.0);
        let spatial = compute_reflection(&mirror, 1.5).unwrap().reflected_endpoint;
        let planar = compute_reflection_2d(DVec2::ZERO, 30.0, -60.0, 1.5)
            .unwrap()
            .reflected_endpoint;
        assert_relative_eq!(planar.x, spatial.x, epsilon = 1e-9);
        assert_relative_eq!(planar.y, spatial.y, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_normal_rejected() {
        assert!(matches!(check_normal_length(0.0), Err(AtelierError::Geometry(_))));
        assert!(check_normal_length(1e-12).is_err());
        assert!(check_normal_length(1.0).is_ok());
    }

    #[test]
    fn test_planar_rejects_bad_input() {
        assert!(compute_reflection_2d(DVec2::new(6.0, 0.0), 0.0, 0.0, 1.0).is_err());
        assert!(compute_reflection_2d(DVec2::ZERO, 95.0, 0.0, 1.0).is_err());
        assert!(compute_reflection_2d(DVec2::ZERO, 0.0, 0.0, 0.0).is_err());
    }
}
