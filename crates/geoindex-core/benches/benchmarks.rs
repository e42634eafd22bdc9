use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoindex_core::{GeoGrid, PlaceRecord, TieredInvertedIndex};

fn synthetic_place(id: i64) -> PlaceRecord {
    let lat = ((id % 180) as f64) - 89.0;
    let lon = ((id % 360) as f64) - 179.0;
    PlaceRecord {
        id,
        name: format!("City{id}"),
        alternate_names: vec![format!("Alt{id}")],
        latitude: lat,
        longitude: lon,
        country_code: if id % 2 == 0 { "US".into() } else { "CA".into() },
        feature_class: "P".into(),
        feature_code: "PPL".into(),
        admin1: "A1".into(),
        admin2: String::new(),
        admin3: String::new(),
        admin4: String::new(),
        timezone: "America/New_York".into(),
        population: (id % 1000) as u64 * 100,
    }
}

fn build_grid(n: i64) -> GeoGrid {
    let mut grid = GeoGrid::new(90);
    for id in 0..n {
        grid.insert(&synthetic_place(id));
    }
    grid
}

fn build_index(n: i64) -> TieredInvertedIndex {
    let mut index = TieredInvertedIndex::new();
    for id in 0..n {
        index.insert(&synthetic_place(id));
    }
    index
}

fn bench_k_nearest(c: &mut Criterion) {
    let grid = build_grid(10_000);
    let origin = synthetic_place(0);
    c.bench_with_input(BenchmarkId::new("k_nearest", 10_000), &grid, |b, grid| {
        b.iter(|| grid.k_nearest(&origin, 10, false))
    });
}

fn bench_search(c: &mut Criterion) {
    let index = build_index(10_000);
    c.bench_with_input(BenchmarkId::new("search", 10_000), &index, |b, index| {
        b.iter(|| index.search("city alt", 10))
    });
}

criterion_group!(benches, bench_k_nearest, bench_search);
criterion_main!(benches);
