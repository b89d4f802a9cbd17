//! Hospital registry - the fixed set of known hospitals.
//!
//! The registry is compiled-in data (see [`Registry::builtin`]): records are
//! created once at startup and never mutated or removed for the lifetime of
//! the process. Iteration order is the insertion order of the dataset, which
//! is also the order the UI lists hospitals in.

mod builtin;

use std::fmt;

/// A single hospital record.
///
/// Immutable once constructed. `name` is unique within a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalRecord {
    /// Display name, unique within the registry.
    pub name: String,
    /// Facility category (e.g. "Hospital").
    pub category: String,
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
    /// Contact information, preformatted for display.
    pub contact: String,
    /// One-line description of the facility.
    pub description: String,
}

impl HospitalRecord {
    /// Create a record, validating the coordinate ranges.
    ///
    /// Returns [`RegistryError::InvalidCoordinates`] if latitude or longitude
    /// is outside the standard domain.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        latitude: f64,
        longitude: f64,
        contact: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        crate::geo::validate_coords(latitude, longitude).map_err(|_| {
            RegistryError::InvalidCoordinates {
                latitude,
                longitude,
            }
        })?;

        Ok(Self {
            name: name.into(),
            category: category.into(),
            latitude,
            longitude,
            contact: contact.into(),
            description: description.into(),
        })
    }

    /// Coordinates as a `(latitude, longitude)` pair.
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for HospitalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("coordinates out of range: lat={latitude}, lon={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("duplicate hospital name: {0}")]
    DuplicateName(String),
}

/// Ordered registry of hospital records.
///
/// Backed by a `Vec` rather than a map: the dataset is small, lookups are
/// rare, and the UI depends on stable insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<HospitalRecord>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a registry from a list of records, rejecting duplicate names.
    pub fn from_records(records: Vec<HospitalRecord>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record)?;
        }
        tracing::debug!(count = registry.len(), "Built hospital registry");
        Ok(registry)
    }

    /// The compiled-in dataset: major hospitals in Kampala.
    pub fn builtin() -> Self {
        builtin::kampala_hospitals()
    }

    fn insert(&mut self, record: HospitalRecord) -> Result<(), RegistryError> {
        if self.get(&record.name).is_some() {
            return Err(RegistryError::DuplicateName(record.name));
        }
        self.records.push(record);
        Ok(())
    }

    /// Get a record by name, case-insensitive.
    ///
    /// Returns `None` if no record matches exactly.
    pub fn get(&self, name: &str) -> Option<&HospitalRecord> {
        self.records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Get a record by position in registry order.
    pub fn get_index(&self, index: usize) -> Option<&HospitalRecord> {
        self.records.get(index)
    }

    /// Case-insensitive substring filter over record names.
    ///
    /// Preserves registry order. An empty (or all-whitespace) query returns
    /// every record unfiltered. No fuzzy matching, no ranking.
    pub fn search(&self, query: &str) -> Vec<&HospitalRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Indices of records matching the query, in registry order.
    ///
    /// Same filter as [`Registry::search`]; used where the caller needs
    /// stable handles back into the registry rather than references.
    pub fn search_indices(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return (0..self.records.len()).collect();
        }
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// All records in registry order.
    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    /// Returns the number of records in the registry.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all records in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &HospitalRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lat: f64, lon: f64) -> HospitalRecord {
        HospitalRecord::new(name, "Hospital", lat, lon, "n/a", "n/a").unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get("Mulago").is_none());
    }

    #[test]
    fn test_record_rejects_bad_coordinates() {
        assert!(HospitalRecord::new("A", "Hospital", 91.0, 0.0, "", "").is_err());
        assert!(HospitalRecord::new("B", "Hospital", 0.0, -181.0, "", "").is_err());
        assert!(HospitalRecord::new("C", "Hospital", -90.0, 180.0, "", "").is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Registry::from_records(vec![
            record("Mengo Hospital", 0.2997, 32.5569),
            record("mengo hospital", 0.3, 32.56),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = Registry::builtin();
        assert!(registry.get("Mengo Hospital").is_some());
        assert!(registry.get("mengo hospital").is_some());
        assert!(registry.get("MENGO HOSPITAL").is_some());
        assert!(registry.get("Mengo").is_none()); // substring is search(), not get()
    }

    #[test]
    fn test_builtin_dataset() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 6);

        let mulago = registry.get("Mulago National Referral Hospital").unwrap();
        assert_eq!(mulago.coords(), (0.3476, 32.5825));
        assert_eq!(mulago.category, "Hospital");
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let registry = Registry::builtin();
        let all = registry.search("");
        assert_eq!(all.len(), registry.len());
        for (found, expected) in all.iter().zip(registry.iter()) {
            assert_eq!(found.name, expected.name);
        }

        // Whitespace-only behaves like empty
        assert_eq!(registry.search("   ").len(), registry.len());
    }

    #[test]
    fn test_search_substring_any_case() {
        let registry = Registry::builtin();

        let matches = registry.search("mulago");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Mulago National Referral Hospital");

        assert_eq!(registry.search("MULAGO").len(), 1);
        assert_eq!(registry.search("MuLaGo").len(), 1);
    }

    #[test]
    fn test_search_no_match() {
        let registry = Registry::builtin();
        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn test_search_common_substring_matches_many() {
        // Every builtin record's name contains "Hospital"
        let registry = Registry::builtin();
        assert_eq!(registry.search("hospital").len(), registry.len());
    }

    #[test]
    fn test_search_indices_align_with_search() {
        let registry = Registry::builtin();
        let indices = registry.search_indices("hospital");
        let records = registry.search("hospital");
        assert_eq!(indices.len(), records.len());
        for (i, record) in indices.iter().zip(records.iter()) {
            assert_eq!(registry.get_index(*i).unwrap().name, record.name);
        }
    }
}
