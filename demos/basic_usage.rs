//! Basic usage example for geoindex-rs
//!
//! This example demonstrates how to:
//! - Build a `GeoGrid` and a `TieredInvertedIndex` from a small in-memory
//!   corpus of places
//! - Run a lexical search
//! - Run a proximity (k-nearest) search

use geoindex_rs::prelude::*;

fn sample_places() -> Vec<PlaceRecord> {
    vec![
        PlaceRecord {
            id: 2988507,
            name: "Paris".into(),
            alternate_names: vec!["Lutetia".into(), "City of Light".into()],
            latitude: 48.85341,
            longitude: 2.3488,
            country_code: "FR".into(),
            feature_class: "P".into(),
            feature_code: "PPLC".into(),
            admin1: "A8".into(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: "Europe/Paris".into(),
            population: 2_161_000,
        },
        PlaceRecord {
            id: 2968815,
            name: "Versailles".into(),
            alternate_names: vec![],
            latitude: 48.80159,
            longitude: 2.13002,
            country_code: "FR".into(),
            feature_class: "P".into(),
            feature_code: "PPL".into(),
            admin1: "A8".into(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: "Europe/Paris".into(),
            population: 85_000,
        },
        PlaceRecord {
            id: 2643743,
            name: "London".into(),
            alternate_names: vec!["Londinium".into()],
            latitude: 51.50853,
            longitude: -0.12574,
            country_code: "GB".into(),
            feature_class: "P".into(),
            feature_code: "PPLC".into(),
            admin1: "ENG".into(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: "Europe/London".into(),
            population: 8_961_989,
        },
    ]
}

fn main() {
    println!("=== geoindex-rs Basic Usage Example ===\n");

    let places = sample_places();

    println!("--- Building the indexes ---");
    let mut grid = GeoGrid::new(90);
    let mut index = TieredInvertedIndex::new();
    for place in &places {
        grid.insert(place);
        index.insert(place);
    }
    println!(
        "✓ Indexed {} places ({} in the lexical index)\n",
        places.len(),
        index.document_count()
    );

    println!("--- Example 1: Lexical search for \"paris\" ---");
    for id in index.search("paris", 5) {
        let place = places.iter().find(|p| p.id == id).expect("id came from the index");
        println!("  {} ({}) — pop {}", place.name, place.country_code, place.population);
    }
    println!();

    println!("--- Example 2: Lexical search by alternate name \"londinium\" ---");
    for id in index.search("londinium", 5) {
        let place = places.iter().find(|p| p.id == id).expect("id came from the index");
        println!("  {} ({})", place.name, place.country_code);
    }
    println!();

    println!("--- Example 3: Nearest neighbor of Paris ---");
    let paris = &places[0];
    for (distance, id) in grid.k_nearest(paris, 2, false) {
        let place = places.iter().find(|p| p.id == id).expect("id came from the grid");
        println!("  {:.1} mi — {} ({})", distance, place.name, place.country_code);
    }

    println!("\n=== Example completed successfully ===");
}
