//! Error handling example for geoindex-rs
//!
//! This example demonstrates the crate's error-handling split: the loader
//! reports recoverable, caller-facing problems (malformed gazetteer lines)
//! through a `Result`, while `GeoGrid` and `TieredInvertedIndex` treat
//! programmer errors (invalid coordinates, `k == 0`) as bugs and panic.

use geoindex_rs::prelude::*;
use std::panic;

fn main() {
    println!("=== geoindex-rs Error Handling Example ===\n");

    println!("--- Example 1: A malformed line is reported, not silently skipped ---");
    let too_few_columns = "1\tIncomplete Row\n";
    match load_places(too_few_columns.as_bytes()) {
        Ok(places) => println!("  unexpectedly parsed {} places", places.len()),
        Err(e) => println!("  ✗ rejected as expected: {e}"),
    }
    println!();

    println!("--- Example 2: An unparsable numeric column is reported ---");
    let bad_latitude =
        "1\tNowhere\tNowhere\t\tnot-a-number\t0\tP\tPPL\tUS\t\t\t\t\t\t0\t\t0\tUTC\t2020-01-01\n";
    match load_places(bad_latitude.as_bytes()) {
        Ok(places) => println!("  unexpectedly parsed {} places", places.len()),
        Err(e) => println!("  ✗ rejected as expected: {e}"),
    }
    println!();

    println!("--- Example 3: Unknown query words are silently dropped, not an error ---");
    let mut index = TieredInvertedIndex::new();
    index.insert(&PlaceRecord {
        id: 1,
        name: "Paris".into(),
        alternate_names: vec![],
        latitude: 48.8566,
        longitude: 2.3522,
        country_code: "FR".into(),
        feature_class: String::new(),
        feature_code: String::new(),
        admin1: String::new(),
        admin2: String::new(),
        admin3: String::new(),
        admin4: String::new(),
        timezone: String::new(),
        population: 0,
    });
    let results = index.search("paris atlantis", 10);
    println!("  search(\"paris atlantis\", 10) = {results:?} (atlantis silently dropped)");
    println!();

    println!("--- Example 4: Out-of-range coordinates are a programmer error, and panic ---");
    let outcome = panic::catch_unwind(|| {
        let mut grid = GeoGrid::new(90);
        grid.insert(&PlaceRecord {
            id: 2,
            name: "Nowhere".into(),
            alternate_names: vec![],
            latitude: 91.0, // out of [-90, 90]
            longitude: 0.0,
            country_code: "US".into(),
            feature_class: String::new(),
            feature_code: String::new(),
            admin1: String::new(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: String::new(),
            population: 0,
        });
    });
    match outcome {
        Ok(()) => println!("  unexpectedly did not panic"),
        Err(_) => println!("  ✗ panicked as expected — this is a caller bug, not a runtime condition"),
    }

    println!("\n=== Example completed successfully ===");
}
