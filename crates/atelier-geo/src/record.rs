use serde::{Deserialize, Serialize};

/// One row of the postal code reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Stored as found in the source, usually `A1A 1A1`
    pub postal_code: String,
    pub city: String,
    pub province_abbreviation: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationRecord {
    pub fn new(
        postal_code: impl Into<String>,
        city: impl Into<String>,
        province_abbreviation: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            city: city.into(),
            province_abbreviation: province_abbreviation.into(),
            latitude,
            longitude,
        }
    }

    /// `"{city}, {province}"`
    pub fn display_address(&self) -> String {
        format!("{}, {}", self.city, self.province_abbreviation)
    }
}

/// How an identifier was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Coordinates,
    PostalCode,
    City,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Coordinates => "coordinates",
            LocationKind::PostalCode => "postal_code",
            LocationKind::City => "city",
        }
    }

    /// Human-readable prefix used in marker labels.
    pub fn label(self) -> &'static str {
        match self {
            LocationKind::Coordinates => "Coordinates",
            LocationKind::PostalCode => "Postal code",
            LocationKind::City => "City",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully resolved identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub kind: LocationKind,
    pub display_address: String,
}

impl ResolvedLocation {
    /// Whole-degree values keep a trailing `.0` in the address.
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            kind: LocationKind::Coordinates,
            display_address: format!("Coordinates: {latitude:?}, {longitude:?}"),
        }
    }

    pub fn from_record(record: &LocationRecord, kind: LocationKind) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            kind,
            display_address: record.display_address(),
        }
    }
}
