//! Gazetteer loader.
//!
//! Parses the tab-separated gazetteer dump format (the one distributed by
//! GeoNames) into [`PlaceRecord`] values. This module only parses; it never
//! touches [`crate::GeoGrid`] or [`crate::TieredInvertedIndex`] directly, so
//! callers can filter or transform records before deciding what to index.

use crate::error::{GeoIndexError, Result};
use crate::place::PlaceRecord;
use std::io::BufRead;

/// Column layout of a gazetteer line, 0-indexed.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_ALTERNATE_NAMES: usize = 3;
const COL_LATITUDE: usize = 4;
const COL_LONGITUDE: usize = 5;
const COL_FEATURE_CLASS: usize = 6;
const COL_FEATURE_CODE: usize = 7;
const COL_COUNTRY_CODE: usize = 8;
const COL_ADMIN1: usize = 10;
const COL_ADMIN2: usize = 11;
const COL_ADMIN3: usize = 12;
const COL_ADMIN4: usize = 13;
const COL_POPULATION: usize = 14;
const COL_TIMEZONE: usize = 17;

/// Minimum column count a line must have to be parsed at all.
const MIN_FIELDS: usize = 18;

/// Reads gazetteer records from `reader`, one per line.
///
/// Blank lines are skipped. A malformed line aborts the whole read with the
/// offending [`GeoIndexError`] — the loader does not skip-and-warn, since a
/// truncated load would silently under-populate both indexes.
///
/// Line numbers in error messages are 1-based.
pub fn load_places<R: BufRead>(reader: R) -> Result<Vec<PlaceRecord>> {
    let mut places = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(GeoIndexError::Io)?;
        if line.trim().is_empty() {
            continue;
        }
        places.push(parse_line(line_no, &line)?);
    }
    Ok(places)
}

fn parse_line(line_no: usize, line: &str) -> Result<PlaceRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(GeoIndexError::TooFewFields {
            line: line_no,
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let id = parse_number(line_no, "geonameid", fields[COL_ID])?;
    let latitude = parse_number(line_no, "latitude", fields[COL_LATITUDE])?;
    let longitude = parse_number(line_no, "longitude", fields[COL_LONGITUDE])?;
    let population = if fields[COL_POPULATION].is_empty() {
        0
    } else {
        parse_number(line_no, "population", fields[COL_POPULATION])?
    };

    let alternate_names = if fields[COL_ALTERNATE_NAMES].is_empty() {
        Vec::new()
    } else {
        fields[COL_ALTERNATE_NAMES]
            .split(',')
            .map(|s| s.to_string())
            .collect()
    };

    Ok(PlaceRecord {
        id,
        name: fields[COL_NAME].to_string(),
        alternate_names,
        latitude,
        longitude,
        country_code: fields[COL_COUNTRY_CODE].to_string(),
        feature_class: fields[COL_FEATURE_CLASS].to_string(),
        feature_code: fields[COL_FEATURE_CODE].to_string(),
        admin1: fields[COL_ADMIN1].to_string(),
        admin2: fields[COL_ADMIN2].to_string(),
        admin3: fields[COL_ADMIN3].to_string(),
        admin4: fields[COL_ADMIN4].to_string(),
        timezone: fields[COL_TIMEZONE].to_string(),
        population,
    })
}

fn parse_number<T: std::str::FromStr>(line_no: usize, field: &'static str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| GeoIndexError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line(id: &str, name: &str, lat: &str, lon: &str) -> String {
        // geonameid, name, asciiname, alternatenames, latitude, longitude,
        // feature_class, feature_code, country_code, cc2, admin1-4,
        // population, elevation, dem, timezone, modification_date
        format!(
            "{id}\t{name}\t{name}\tAlt1,Alt2\t{lat}\t{lon}\tP\tPPLC\tFR\t\tA8\t75\t751\t\t2161000\t\t42\tEurope/Paris\t2020-01-01"
        )
    }

    #[test]
    fn parses_a_well_formed_line() {
        let line = sample_line("2988507", "Paris", "48.85341", "2.3488");
        let places = load_places(line.as_bytes()).unwrap();
        assert_eq!(places.len(), 1);
        let p = &places[0];
        assert_eq!(p.id, 2988507);
        assert_eq!(p.name, "Paris");
        assert_eq!(p.alternate_names, vec!["Alt1", "Alt2"]);
        assert_eq!(p.country_code, "FR");
        assert_eq!(p.population, 2161000);
        assert_eq!(p.timezone, "Europe/Paris");
        assert!((p.latitude - 48.85341).abs() < 1e-9);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = format!("\n{}\n\n", sample_line("1", "A", "0", "0"));
        let places = load_places(data.as_bytes()).unwrap();
        assert_eq!(places.len(), 1);
    }

    #[test]
    fn missing_population_defaults_to_zero() {
        let mut fields: Vec<String> =
            sample_line("1", "A", "0", "0").split('\t').map(|s| s.to_string()).collect();
        fields[COL_POPULATION] = String::new();
        let line = fields.join("\t");
        let places = load_places(line.as_bytes()).unwrap();
        assert_eq!(places[0].population, 0);
    }

    #[test]
    fn too_few_fields_is_reported_with_line_number() {
        let data = "valid\tline\nid\tname\n";
        let err = load_places(data.as_bytes()).unwrap_err();
        match err {
            GeoIndexError::TooFewFields { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_latitude_is_reported() {
        let line = sample_line("1", "Nowhere", "notanumber", "0");
        let err = load_places(line.as_bytes()).unwrap_err();
        match err {
            GeoIndexError::InvalidNumber { field, .. } => assert_eq!(field, "latitude"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
