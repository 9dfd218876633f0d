//! Tunables for ray evaluation and display.

use atelier_core::{error::check_positive, AtelierError, Result, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpticsConfig {
    /// Length of the drawn incident and reflected rays
    pub ray_length: f64,
    /// Half the length of the segment drawn for each mirror
    pub mirror_half_length: f64,
    /// Length of the drawn mirror normal
    pub normal_length: f64,
    /// Upper bound on mirrors in one scene
    pub max_mirrors: usize,
    /// Half-width of the square display window
    pub view_extent: f64,
}

impl OpticsConfig {
    pub const DEFAULT_RAY_LENGTH: f64 = 2.0;

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AtelierError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self {
            ray_length: Self::DEFAULT_RAY_LENGTH,
            mirror_half_length: 1.0,
            normal_length: 0.5,
            max_mirrors: 4,
            view_extent: 6.0,
        }
    }
}

impl Validate for OpticsConfig {
    fn validate(&self) -> Result<()> {
        check_positive("ray_length", self.ray_length)?;
        check_positive("mirror_half_length", self.mirror_half_length)?;
        check_positive("normal_length", self.normal_length)?;
        check_positive("view_extent", self.view_extent)?;
        if self.max_mirrors == 0 {
            return Err(AtelierError::Config("max_mirrors must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = OpticsConfig::default();
        assert_eq!(config.ray_length, 2.0);
        assert_eq!(config.max_mirrors, 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = OpticsConfig::from_json_str(r#"{ "ray_length": 3.5 }"#).unwrap();
        assert_eq!(config.ray_length, 3.5);
        assert_eq!(config.normal_length, 0.5);
        assert_eq!(config.view_extent, 6.0);
    }

    #[test]
    fn test_json_rejects_bad_values() {
        assert!(matches!(
            OpticsConfig::from_json_str(r#"{ "ray_length": 0.0 }"#),
            Err(AtelierError::InvalidArgument(_))
        ));
        assert!(matches!(
            OpticsConfig::from_json_str(r#"{ "max_mirrors": 0 }"#),
            Err(AtelierError::Config(_))
        ));
        assert!(matches!(
            OpticsConfig::from_json_str("not json"),
            Err(AtelierError::Config(_))
        ));
    }
}
