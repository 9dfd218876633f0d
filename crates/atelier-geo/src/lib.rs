//! Atelier geo: resolve free-form location identifiers against a reference
//! table of Canadian postal codes and cities.
//!
//! An identifier is tried, in order, as a `lat, lon` pair, as a postal
//! code, then as a city name. A miss is an ordinary `None`, never an error.

pub mod batch;
pub mod config;
pub mod markers;
pub mod postal;
pub mod record;
pub mod resolver;
pub mod table;

pub use batch::{resolve_batch, unresolved, BatchEntry};
pub use config::ResolverConfig;
pub use markers::{build_map_markers, map_center, MapMarker, MarkerColor};
pub use postal::{
    generate_postal_code, generate_postal_codes, is_valid_postal_code, normalize_postal_code,
    postal_key, VALID_LETTERS,
};
pub use record::{LocationKind, LocationRecord, ResolvedLocation};
pub use resolver::{parse_coordinates, resolve};
pub use table::LocationTable;
