//! Orthogonal 2D views of the 3D rays: top-down (`xy`) and side (`xz`).

use atelier_math::{polar_offset, Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::engine::RayPair;
use crate::mirror::MirrorSpec;

/// Projection plane used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPlane {
    /// Top view: keeps x and y.
    Xy,
    /// Side view: keeps x and z.
    Xz,
}

impl ViewPlane {
    pub const ALL: [ViewPlane; 2] = [ViewPlane::Xy, ViewPlane::Xz];

    /// Select the two coordinates of `p` that this view keeps.
    pub fn project(self, p: Point3) -> Point2 {
        match self {
            ViewPlane::Xy => Point2::new(p.x, p.y),
            ViewPlane::Xz => Point2::new(p.x, p.z),
        }
    }

    /// The mirror orientation angle visible in this view.
    fn orientation(self, mirror: &MirrorSpec) -> f64 {
        match self {
            ViewPlane::Xy => mirror.plane_orientation_xy,
            ViewPlane::Xz => mirror.plane_orientation_z,
        }
    }
}

/// A 2D line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    pub fn points(&self) -> [Point2; 2] {
        [self.start, self.end]
    }
}

/// Incident and reflected rays of one mirror in one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRays {
    /// From the incident endpoint to the mirror
    pub incident: Segment2,
    /// From the mirror to the reflected endpoint
    pub reflected: Segment2,
}

pub fn project_for_display(pair: &RayPair, plane: ViewPlane) -> ProjectedRays {
    let position = plane.project(pair.position);
    ProjectedRays {
        incident: Segment2::new(plane.project(pair.incident_endpoint), position),
        reflected: Segment2::new(position, plane.project(pair.reflected_endpoint)),
    }
}

/// The mirror itself, drawn as a segment centred on its position and
/// rotated by the orientation angle that is visible in `plane`.
pub fn mirror_segment(mirror: &MirrorSpec, plane: ViewPlane, half_length: f64) -> Segment2 {
    let center = plane.project(mirror.position);
    let offset = polar_offset(plane.orientation(mirror), half_length);
    Segment2::new(center - offset, center + offset)
}

/// Normal marker drawn from the mirror position at a right angle to
/// [`mirror_segment`].
pub fn normal_segment(mirror: &MirrorSpec, plane: ViewPlane, length: f64) -> Segment2 {
    let center = plane.project(mirror.position);
    let offset = polar_offset(plane.orientation(mirror) + 90.0, length);
    Segment2::new(center, center + offset)
}
