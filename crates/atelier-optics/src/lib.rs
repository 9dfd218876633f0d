//! Atelier optics: reflection of incident rays off oriented planar mirrors.
//!
//! Angles are always given in degrees. Each evaluation is a pure function
//! of its inputs; nothing is cached between calls.

pub mod config;
pub mod engine;
pub mod mirror;
pub mod projection;
pub mod scene;

pub use config::OpticsConfig;
pub use engine::{compute_reflection, compute_reflection_2d, RayPair, RayPair2};
pub use mirror::MirrorSpec;
pub use projection::{
    mirror_segment, normal_segment, project_for_display, ProjectedRays, Segment2, ViewPlane,
};
pub use scene::{MirrorScene, MirrorView, SceneView};
