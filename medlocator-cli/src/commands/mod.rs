//! Subcommand implementations.

pub mod distance;
pub mod list;
pub mod run;
pub mod search;

use crate::error::CliError;
use medlocator::registry::{HospitalRecord, Registry};

/// Resolve a hospital by name, accepting an exact name or a unique
/// case-insensitive fragment.
pub fn resolve_hospital(registry: &Registry, query: &str) -> Result<HospitalRecord, CliError> {
    if let Some(record) = registry.get(query) {
        return Ok(record.clone());
    }

    let matches = registry.search(query);
    match matches.len() {
        1 => Ok(matches[0].clone()),
        _ => Err(CliError::HospitalNotFound {
            query: query.to_string(),
            matches: matches.iter().map(|r| r.name.clone()).collect(),
        }),
    }
}
