//! Degree-based direction and normal construction.
//!
//! All inputs are in degrees; conversion to radians happens here and
//! nowhere else.

use crate::{Vector2, Vector3};

/// Unit direction for an azimuth (horizontal plane) and elevation:
/// `(cos e cos a, cos e sin a, sin e)`.
pub fn direction_from_angles(azimuth_deg: f64, elevation_deg: f64) -> Vector3 {
    let (sin_a, cos_a) = azimuth_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = elevation_deg.to_radians().sin_cos();
    Vector3::new(cos_e * cos_a, cos_e * sin_a, sin_e)
}

/// Surface normal of a plane rotated by `azimuth_deg` and tilted by
/// `elevation_deg`: `(sin a cos e, -cos a cos e, sin e)`.
///
/// Not normalized; callers normalize before use.
pub fn normal_from_angles(azimuth_deg: f64, elevation_deg: f64) -> Vector3 {
    let (sin_a, cos_a) = azimuth_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = elevation_deg.to_radians().sin_cos();
    Vector3::new(sin_a * cos_e, -cos_a * cos_e, sin_e)
}

/// Planar unit direction `(cos a, sin a)`.
pub fn direction_2d(angle_deg: f64) -> Vector2 {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    Vector2::new(cos_a, sin_a)
}

/// Planar mirror normal `(sin a, -cos a)`.
pub fn normal_2d(angle_deg: f64) -> Vector2 {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    Vector2::new(sin_a, -cos_a)
}

/// Offset of `length` along the planar angle `angle_deg`.
pub fn polar_offset(angle_deg: f64, length: f64) -> Vector2 {
    direction_2d(angle_deg) * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_azimuth_45() {
        let d = direction_from_angles(45.0, 0.0);
        assert_relative_eq!(d.x, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(d.y, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(d.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_straight_up() {
        let d = direction_from_angles(123.0, 90.0);
        assert_relative_eq!(d.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_untilted_faces_negative_y() {
        let n = normal_from_angles(0.0, 0.0);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_is_unit_for_any_angles() {
        for a in [-90.0, -33.0, 0.0, 12.5, 90.0] {
            for e in [-90.0, -45.0, 0.0, 60.0, 90.0] {
                assert_relative_eq!(normal_from_angles(a, e).length(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_planar_helpers_agree_with_spatial() {
        let d2 = direction_2d(30.0);
        let d3 = direction_from_angles(30.0, 0.0);
        assert_relative_eq!(d2.x, d3.x, epsilon = 1e-12);
        assert_relative_eq!(d2.y, d3.y, epsilon = 1e-12);

        let n2 = normal_2d(30.0);
        let n3 = normal_from_angles(30.0, 0.0);
        assert_relative_eq!(n2.x, n3.x, epsilon = 1e-12);
        assert_relative_eq!(n2.y, n3.y, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_offset_length() {
        let o = polar_offset(90.0, 0.5);
        assert_relative_eq!(o.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(o.y, 0.5, epsilon = 1e-12);
    }
}
