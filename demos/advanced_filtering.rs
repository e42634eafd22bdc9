//! Advanced filtering example for geoindex-rs
//!
//! This example demonstrates the ranking and filtering behavior that sets
//! the two indexes apart from a plain substring search: tier priority,
//! population-weighted tie-breaking, keyword coverage, and the
//! same-country proximity filter.

use geoindex_rs::prelude::*;

const GAZETTEER: &str = "\
1\tSpringfield\tSpringfield\t\t39.80172\t-89.64371\tP\tPPLA\tUS\t\tIL\t\t\t\t111454\t\t190\tAmerica/Chicago\t2011-05-14\n\
2\tSpringfield\tSpringfield\t\t42.10148\t-72.58981\tP\tPPL\tUS\t\tMA\t\t\t\t155929\t\t21\tAmerica/New_York\t2011-05-14\n\
3\tSan Jose\tSan Jose\t\t37.33939\t-121.89496\tP\tPPLA2\tUS\t\tCA\t\t\t\t1013240\t\t25\tAmerica/Los_Angeles\t2011-05-14\n\
4\tSan Francisco\tSan Francisco\t\t37.77493\t-122.41942\tP\tPPL\tUS\t\tCA\t\t\t\t873965\t\t16\tAmerica/Los_Angeles\t2011-05-14\n\
5\tToronto\tToronto\t\t43.70011\t-79.4163\tP\tPPLA\tCA\t\t08\t\t\t\t2731571\t\t76\tAmerica/Toronto\t2011-05-14\n\
";

fn main() -> anyhow::Result<()> {
    println!("=== geoindex-rs Advanced Filtering Example ===\n");

    let places = load_places(GAZETTEER.as_bytes())?;

    let mut grid = GeoGrid::new(90);
    let mut index = TieredInvertedIndex::new();
    for place in &places {
        grid.insert(place);
        index.insert(place);
    }
    let by_id = |id: i64| places.iter().find(|p| p.id == id).expect("id came from an index");

    println!("--- Example 1: Population breaks ties between two Springfields ---");
    for id in index.search("springfield", 10) {
        let place = by_id(id);
        println!("  {} ({}) — pop {}", place.admin1, place.country_code, place.population);
    }
    println!();

    println!("--- Example 2: Coverage beats raw population ---");
    println!("(\"san jose\" should outrank \"San Francisco\" despite its smaller population)");
    for id in index.search("san jose", 10) {
        let place = by_id(id);
        println!("  {} — pop {}", place.name, place.population);
    }
    println!();

    println!("--- Example 3: Nearest California city, any country ---");
    let san_jose = places.iter().find(|p| p.name == "San Jose").unwrap();
    for (distance, id) in grid.k_nearest(san_jose, 3, false) {
        let place = by_id(id);
        println!("  {:.1} mi — {} ({})", distance, place.name, place.country_code);
    }
    println!();

    println!("--- Example 4: Same-country filter excludes Toronto ---");
    let results = grid.k_nearest(san_jose, 3, true);
    assert!(results.iter().all(|&(_, id)| by_id(id).country_code == "US"));
    for (distance, id) in &results {
        println!("  {:.1} mi — {} ({})", distance, by_id(*id).name, by_id(*id).country_code);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
