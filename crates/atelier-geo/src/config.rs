//! Batch resolution and map settings.

use atelier_core::{error::check_range, AtelierError, Result, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Identifiers handed to one worker at a time
    pub batch_size: usize,
    /// Resolve batches on the rayon pool instead of the calling thread
    pub parallel: bool,
    /// Map centre `(lat, lon)` used when there is nothing to show
    pub default_center: (f64, f64),
}

impl ResolverConfig {
    pub const DEFAULT_BATCH_SIZE: usize = 256;

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AtelierError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            batch_size: Self::DEFAULT_BATCH_SIZE,
            parallel: true,
            default_center: (46.8139, -71.2080),
        }
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(AtelierError::Config("batch_size must be at least 1".into()));
        }
        check_range("default_center.latitude", self.default_center.0, -90.0, 90.0)?;
        check_range("default_center.longitude", self.default_center.1, -180.0, 180.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.batch_size, 256);
        assert!(config.parallel);
        config.validate().unwrap();
    }

    #[test]
    fn test_from_json() {
        let config =
            ResolverConfig::from_json_str(r#"{ "batch_size": 8, "parallel": false }"#).unwrap();
        assert_eq!(config.batch_size, 8);
        assert!(!config.parallel);
        assert_eq!(config.default_center, (46.8139, -71.2080));

        let config =
            ResolverConfig::from_json_str(r#"{ "default_center": [48.45, -68.52] }"#).unwrap();
        assert_eq!(config.default_center, (48.45, -68.52));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            ResolverConfig::from_json_str(r#"{ "batch_size": 0 }"#),
            Err(AtelierError::Config(_))
        ));
        assert!(matches!(
            ResolverConfig::from_json_str(r#"{ "default_center": [95.0, 0.0] }"#),
            Err(AtelierError::InvalidArgument(_))
        ));
    }
}
