//! Compiled-in hospital dataset.

use super::{HospitalRecord, Registry};

/// Major hospitals in Kampala.
///
/// Coordinates and contact details are fixed reference data; the set does not
/// change at runtime.
pub(super) fn kampala_hospitals() -> Registry {
    let records = vec![
        entry(
            "Mulago National Referral Hospital",
            0.3476,
            32.5825,
            "Phone: +256 414 532 000",
            "National referral hospital with specialized services",
        ),
        entry(
            "Rubaga Hospital",
            0.3028,
            32.5506,
            "Phone: +256 414 270 621",
            "Private hospital on Rubaga Hill",
        ),
        entry(
            "Mengo Hospital",
            0.2997,
            32.5569,
            "Phone: +256 414 274 893",
            "Private not-for-profit hospital",
        ),
        entry(
            "Nsambya Hospital",
            0.2897,
            32.6103,
            "Phone: +256 414 510 221",
            "Private hospital with emergency services",
        ),
        entry(
            "Kawempe General Hospital",
            0.3786,
            32.5667,
            "Phone: +256 414 661 000",
            "Public hospital in Kawempe Division",
        ),
        entry(
            "Kibuli Hospital",
            0.3131,
            32.5875,
            "Phone: +256 414 273 000",
            "Private hospital near Kibuli Mosque",
        ),
    ];

    // The dataset is static; a failure here is a programming error in the
    // table above and must not be papered over with an empty registry.
    Registry::from_records(records).expect("builtin hospital dataset is valid")
}

fn entry(name: &str, lat: f64, lon: f64, contact: &str, description: &str) -> HospitalRecord {
    HospitalRecord {
        name: name.to_string(),
        category: "Hospital".to_string(),
        latitude: lat,
        longitude: lon,
        contact: contact.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_coordinates_valid() {
        for record in kampala_hospitals().iter() {
            assert!(
                crate::geo::validate_coords(record.latitude, record.longitude).is_ok(),
                "invalid coordinates for {}",
                record.name
            );
        }
    }

    #[test]
    fn test_builtin_constructs_full_dataset() {
        // Construction must succeed (not fall back to anything smaller)
        // with all six records in insertion order.
        let registry = kampala_hospitals();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.get_index(0).unwrap().name,
            "Mulago National Referral Hospital"
        );
    }

    #[test]
    fn test_builtin_names_unique() {
        let registry = kampala_hospitals();
        for record in registry.iter() {
            let matches = registry
                .iter()
                .filter(|r| r.name.eq_ignore_ascii_case(&record.name))
                .count();
            assert_eq!(matches, 1, "duplicate name: {}", record.name);
        }
    }
}
