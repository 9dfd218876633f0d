//! Map marker descriptors for resolved identifiers.

use serde::{Deserialize, Serialize};

use crate::batch::BatchEntry;
use crate::config::ResolverConfig;
use crate::record::LocationKind;

/// Marker colour, one per [`LocationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Red,
    Blue,
}

impl MarkerColor {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
        }
    }
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LocationKind> for MarkerColor {
    fn from(kind: LocationKind) -> Self {
        match kind {
            LocationKind::Coordinates => MarkerColor::Green,
            LocationKind::PostalCode => MarkerColor::Red,
            LocationKind::City => MarkerColor::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    /// e.g. `"Postal code: G0J 1J0"`
    pub label: String,
    pub address: String,
    pub color_class: MarkerColor,
}

/// One marker per resolved entry, in input order. Unresolved entries are
/// skipped; see [`crate::batch::unresolved`].
pub fn build_map_markers(entries: &[BatchEntry]) -> Vec<MapMarker> {
    entries
        .iter()
        .filter_map(|entry| {
            let location = entry.location.as_ref()?;
            Some(MapMarker {
                latitude: location.latitude,
                longitude: location.longitude,
                label: format!("{}: {}", location.kind.label(), entry.identifier),
                address: location.display_address.clone(),
                color_class: location.kind.into(),
            })
        })
        .collect()
}

/// Mean position of `markers`, or the configured default centre.
pub fn map_center(markers: &[MapMarker], config: &ResolverConfig) -> (f64, f64) {
    if markers.is_empty() {
        return config.default_center;
    }
    let n = markers.len() as f64;
    let (lat, lon) = markers
        .iter()
        .fold((0.0, 0.0), |(lat, lon), m| (lat + m.latitude, lon + m.longitude));
    (lat / n, lon / n)
}
