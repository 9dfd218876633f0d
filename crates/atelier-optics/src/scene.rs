//! A small set of mirrors evaluated together.

use atelier_core::{AtelierError, Result, Validate};
use atelier_math::Aabb2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::OpticsConfig;
use crate::engine::{compute_reflection, RayPair};
use crate::mirror::MirrorSpec;
use crate::projection::{
    mirror_segment, normal_segment, project_for_display, ProjectedRays, Segment2, ViewPlane,
};

/// Ordered mirrors, each with its own incident ray. Mirrors do not
/// interact: every ray bounces exactly once, off its own mirror.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorScene {
    mirrors: Vec<MirrorSpec>,
}

/// Everything needed to draw one mirror in one view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorView {
    pub rays: ProjectedRays,
    pub mirror: Segment2,
    pub normal: Segment2,
}

/// One projection of a whole scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneView {
    pub plane: ViewPlane,
    pub mirrors: Vec<MirrorView>,
    /// Covers the configured display window and every drawn point
    pub bounds: Aabb2,
}

impl MirrorScene {
    pub fn new(mirrors: Vec<MirrorSpec>, config: &OpticsConfig) -> Result<Self> {
        config.validate()?;
        if mirrors.is_empty() || mirrors.len() > config.max_mirrors {
            return Err(AtelierError::InvalidArgument(format!(
                "a scene needs between 1 and {} mirrors, got {}",
                config.max_mirrors,
                mirrors.len()
            )));
        }
        for mirror in &mirrors {
            mirror.validate()?;
        }
        Ok(Self { mirrors })
    }

    pub fn mirrors(&self) -> &[MirrorSpec] {
        &self.mirrors
    }

    /// Ray pairs for every mirror, in scene order.
    pub fn evaluate(&self, config: &OpticsConfig) -> Result<Vec<RayPair>> {
        self.mirrors
            .iter()
            .map(|m| compute_reflection(m, config.ray_length))
            .collect()
    }

    pub fn render(&self, plane: ViewPlane, config: &OpticsConfig) -> Result<SceneView> {
        let pairs = self.evaluate(config)?;
        let mut bounds = Aabb2::square(config.view_extent);
        let mut mirrors = Vec::with_capacity(pairs.len());

        for (spec, pair) in self.mirrors.iter().zip(&pairs) {
            let view = MirrorView {
                rays: project_for_display(pair, plane),
                mirror: mirror_segment(spec, plane, config.mirror_half_length),
                normal: normal_segment(spec, plane, config.normal_length),
            };
            let points = [
                view.rays.incident.points(),
                view.rays.reflected.points(),
                view.mirror.points(),
                view.normal.points(),
            ]
            .concat();
            if let Some(extent) = Aabb2::from_points(&points) {
                bounds = bounds.merge(&extent);
            }
            mirrors.push(view);
        }

        debug!("rendered {} mirrors in {:?} view", mirrors.len(), plane);
        Ok(SceneView {
            plane,
            mirrors,
            bounds,
        })
    }
}
