//! Resolving many identifiers against one shared table.

use atelier_core::{Result, Validate};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::record::ResolvedLocation;
use crate::resolver::resolve;
use crate::table::LocationTable;

/// One input identifier and what it resolved to, if anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub identifier: String,
    pub location: Option<ResolvedLocation>,
}

fn resolve_chunk(chunk: &[&str], table: &LocationTable) -> Vec<BatchEntry> {
    chunk
        .iter()
        .map(|&identifier| BatchEntry {
            identifier: identifier.to_string(),
            location: resolve(identifier, table),
        })
        .collect()
}

/// Resolve every non-blank identifier, in chunks of `config.batch_size`.
///
/// Output order always equals input order, whether chunks run on the
/// rayon pool or sequentially. Misses are kept as entries with no
/// location and logged; they never stop the batch.
pub fn resolve_batch<S>(
    identifiers: &[S],
    table: &LocationTable,
    config: &ResolverConfig,
) -> Result<Vec<BatchEntry>>
where
    S: AsRef<str>,
{
    config.validate()?;

    let inputs: Vec<&str> = identifiers
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    let chunks: Vec<Vec<BatchEntry>> = if config.parallel {
        inputs
            .par_chunks(config.batch_size)
            .map(|chunk| resolve_chunk(chunk, table))
            .collect()
    } else {
        inputs
            .chunks(config.batch_size)
            .map(|chunk| resolve_chunk(chunk, table))
            .collect()
    };
    let entries: Vec<BatchEntry> = chunks.into_iter().flatten().collect();

    for entry in entries.iter().filter(|e| e.location.is_none()) {
        warn!("no location found for {:?}", entry.identifier);
    }
    debug!(
        "resolved {} of {} identifiers",
        entries.len() - unresolved(&entries).len(),
        entries.len()
    );
    Ok(entries)
}

/// Identifiers that did not resolve, in input order.
pub fn unresolved(entries: &[BatchEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.location.is_none())
        .map(|e| e.identifier.as_str())
        .collect()
}
