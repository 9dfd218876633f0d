//! Identifier classification.
//!
//! Interpretations are tried in a fixed order and the first hit wins:
//! coordinate pair, postal code, city name.

use log::trace;

use crate::postal::{is_valid_postal_code, postal_key};
use crate::record::{LocationKind, ResolvedLocation};
use crate::table::LocationTable;

type Classifier = fn(&str, &LocationTable) -> Option<ResolvedLocation>;

const CLASSIFIERS: [(LocationKind, Classifier); 3] = [
    (LocationKind::Coordinates, as_coordinates),
    (LocationKind::PostalCode, as_postal_code),
    (LocationKind::City, as_city),
];

/// Resolve one identifier. `None` means no interpretation matched.
pub fn resolve(identifier: &str, table: &LocationTable) -> Option<ResolvedLocation> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    CLASSIFIERS.iter().find_map(|(kind, classify)| {
        trace!("trying {identifier:?} as {kind}");
        classify(identifier, table)
    })
}

/// Parse `"lat, lon"`. Both halves must be numbers and in range.
pub fn parse_coordinates(identifier: &str) -> Option<(f64, f64)> {
    let (lat, lon) = identifier.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Some((lat, lon))
    } else {
        None
    }
}

fn as_coordinates(identifier: &str, _table: &LocationTable) -> Option<ResolvedLocation> {
    parse_coordinates(identifier).map(|(lat, lon)| ResolvedLocation::coordinates(lat, lon))
}

fn as_postal_code(identifier: &str, table: &LocationTable) -> Option<ResolvedLocation> {
    let cleaned = postal_key(identifier);
    if !is_valid_postal_code(&cleaned) {
        return None;
    }
    table
        .find_postal(&cleaned)
        .map(|r| ResolvedLocation::from_record(r, LocationKind::PostalCode))
}

fn as_city(identifier: &str, table: &LocationTable) -> Option<ResolvedLocation> {
    table
        .find_city(identifier)
        .map(|r| ResolvedLocation::from_record(r, LocationKind::City))
}
