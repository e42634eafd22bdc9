//! The [`PlaceRecord`] contract shared by [`crate::GeoGrid`] and
//! [`crate::TieredInvertedIndex`].
//!
//! Neither index owns this type's lifecycle: callers build `PlaceRecord`
//! values (typically via [`crate::loader`]) and hand out `&PlaceRecord`
//! borrows during the warm-up phase. The indexes never mutate or retain a
//! record beyond the projections they need.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// A single populated place, as read from a gazetteer dump.
///
/// Only the fields below are part of the core's contract; a loader is free
/// to carry extra columns (ASCII name, elevation, ...) that the indexes
/// simply never look at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PlaceRecord {
    /// Stable unique identifier.
    pub id: i64,
    /// Display name, e.g. `"Paris"`.
    pub name: String,
    /// Alternate display names, e.g. localized or historical spellings.
    pub alternate_names: Vec<String>,
    /// Latitude in decimal degrees, WGS-84. Expected range `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in decimal degrees, WGS-84. Expected range `[-180, 180]`.
    pub longitude: f64,
    /// ISO-3166 2-letter country code.
    pub country_code: String,
    /// Geonames-style feature class (may be empty).
    pub feature_class: String,
    /// Geonames-style feature code (may be empty).
    pub feature_code: String,
    /// First-level administrative division code (may be empty).
    pub admin1: String,
    /// Second-level administrative division code (may be empty).
    pub admin2: String,
    /// Third-level administrative division code (may be empty).
    pub admin3: String,
    /// Fourth-level administrative division code (may be empty).
    pub admin4: String,
    /// IANA timezone id, e.g. `"America/New_York"`.
    pub timezone: String,
    /// Population count; 0 if unknown.
    pub population: u64,
}

impl PlaceRecord {
    /// Returns `true` if the coordinates are finite and within the valid
    /// WGS-84 ranges. [`crate::GeoGrid::insert`] panics on records that
    /// fail this check, so callers should filter with it first.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lat: f64, lon: f64) -> PlaceRecord {
        PlaceRecord {
            id: 1,
            name: "Testville".into(),
            alternate_names: vec![],
            latitude: lat,
            longitude: lon,
            country_code: "US".into(),
            feature_class: String::new(),
            feature_code: String::new(),
            admin1: String::new(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: "America/New_York".into(),
            population: 0,
        }
    }

    #[test]
    fn valid_coordinates_pass() {
        assert!(sample(40.0, -74.0).has_valid_coordinates());
        assert!(sample(90.0, 180.0).has_valid_coordinates());
        assert!(sample(-90.0, -180.0).has_valid_coordinates());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(!sample(90.1, 0.0).has_valid_coordinates());
        assert!(!sample(0.0, 180.1).has_valid_coordinates());
        assert!(!sample(f64::NAN, 0.0).has_valid_coordinates());
        assert!(!sample(0.0, f64::INFINITY).has_valid_coordinates());
    }
}
