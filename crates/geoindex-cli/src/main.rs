//! geoindex — Command-line interface for geoindex-core
//!
//! Loads a gazetteer dump into memory, builds a [`GeoGrid`] and a
//! [`TieredInvertedIndex`] over it, and exposes the two index query
//! families as subcommands.
//!
//! Usage examples
//! --------------
//! - Show stats: `geoindex -i cities.txt stats`
//! - Lexical search: `geoindex -i cities.txt search "san jose" -k 5`
//! - Nearest neighbors: `geoindex -i cities.txt nearest 5391959 -k 10 --same-country`
//! - Read from stdin: `cat cities.txt | geoindex stats`

mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use geoindex_core::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let places = load_input(args.input.as_deref())?;

    // Warm-up phase: sequential inserts only, per the core's concurrency
    // contract. Coordinates are validated here, not inside GeoGrid::insert
    // — a place with missing/invalid coordinates is simply left out of the
    // spatial index, but still contributes to the lexical one.
    let mut by_id: HashMap<i64, PlaceRecord> = HashMap::with_capacity(places.len());
    let mut grid = GeoGrid::new(args.division);
    let mut index = TieredInvertedIndex::new();
    for place in places {
        if place.has_valid_coordinates() {
            grid.insert(&place);
        }
        index.insert(&place);
        by_id.insert(place.id, place);
    }

    #[cfg(feature = "json")]
    let json = args.json;
    #[cfg(not(feature = "json"))]
    let json = false;

    match args.command {
        Commands::Stats => print_stats(&by_id, &index, &grid, json),

        Commands::Search { query, k } => {
            if k == 0 {
                bail!("-k must be greater than 0");
            }
            let ids = index.search(&query, k);
            print_search_results(&ids, &by_id, json);
        }

        Commands::Nearest { id, k, same_country } => {
            if k == 0 {
                bail!("-k must be greater than 0");
            }
            let reference = by_id
                .get(&id)
                .with_context(|| format!("no loaded place with id {id}"))?;
            let neighbors = grid.k_nearest(reference, k, same_country);
            print_neighbors(&neighbors, &by_id, json);
        }
    }

    Ok(())
}

/// Reads a gazetteer dump from `path`, or from stdin when `path` is `None`
/// or `"-"`.
fn load_input(path: Option<&str>) -> anyhow::Result<Vec<PlaceRecord>> {
    match path {
        None | Some("-") => {
            let stdin = io::stdin();
            load_places(stdin.lock()).context("reading gazetteer from stdin")
        }
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {path}"))?;
            load_places(BufReader::new(file)).with_context(|| format!("parsing {path}"))
        }
    }
}

fn print_stats(by_id: &HashMap<i64, PlaceRecord>, index: &TieredInvertedIndex, grid: &GeoGrid, json: bool) {
    #[cfg(feature = "json")]
    if json {
        let stats = serde_json::json!({
            "places_loaded": by_id.len(),
            "places_indexed_lexically": index.document_count(),
            "grid_division": grid.division(),
        });
        println!("{stats}");
        return;
    }
    let _ = json;

    println!("Database statistics:");
    println!("  Places loaded:    {}", by_id.len());
    println!("  Lexically indexed: {}", index.document_count());
    println!("  Grid division:    {} x {}", grid.division(), grid.division());
}

fn print_search_results(ids: &[i64], by_id: &HashMap<i64, PlaceRecord>, json: bool) {
    #[cfg(feature = "json")]
    if json {
        let rows: Vec<_> = ids.iter().filter_map(|id| by_id.get(id)).collect();
        println!("{}", serde_json::to_string_pretty(&rows).expect("places serialize"));
        return;
    }
    let _ = json;

    if ids.is_empty() {
        println!("No matches.");
        return;
    }
    for (rank, id) in ids.iter().enumerate() {
        match by_id.get(id) {
            Some(place) => println!(
                "{}. {} ({}) — pop {}",
                rank + 1,
                place.name,
                place.country_code,
                place.population
            ),
            None => println!("{}. <unresolved id {}>", rank + 1, id),
        }
    }
}

fn print_neighbors(neighbors: &[(f64, i64)], by_id: &HashMap<i64, PlaceRecord>, json: bool) {
    #[cfg(feature = "json")]
    if json {
        #[derive(serde::Serialize)]
        struct Neighbor<'a> {
            id: i64,
            distance_miles: f64,
            place: Option<&'a PlaceRecord>,
        }
        let rows: Vec<_> = neighbors
            .iter()
            .map(|&(distance_miles, id)| Neighbor {
                id,
                distance_miles,
                place: by_id.get(&id),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).expect("neighbors serialize"));
        return;
    }
    let _ = json;

    if neighbors.is_empty() {
        println!("No neighbors found.");
        return;
    }
    for (rank, (distance, id)) in neighbors.iter().enumerate() {
        match by_id.get(id) {
            Some(place) => println!(
                "{}. {} ({}) — {:.1} mi",
                rank + 1,
                place.name,
                place.country_code,
                distance
            ),
            None => println!("{}. <unresolved id {}> — {:.1} mi", rank + 1, id, distance),
        }
    }
}
