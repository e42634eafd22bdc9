//! [`GeoGrid`]: a latitude/longitude bucket grid supporting expanding-ring
//! k-nearest-neighbor search with longitude wrap-around.

use crate::distance::{haversine_miles, DistanceFn};
use crate::place::PlaceRecord;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A compact per-cell entry. Coordinates are stored as `f32` and the
/// country code as a fixed 2-byte array — cells are read far more often
/// than they're written, so keeping entries small and contiguous matters
/// more than boxing full `PlaceRecord`s.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellEntry {
    id: i64,
    latitude: f32,
    longitude: f32,
    country_code: [u8; 2],
}

/// Max-heap entry ordered by distance, so `BinaryHeap::peek` surfaces the
/// current worst admitted candidate and can be evicted in O(log k).
struct HeapEntry {
    dist: f64,
    id: i64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.id == other.id
    }
}
impl Eq for HeapEntry {}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .partial_cmp(&other.dist)
            .expect("distance must be finite")
    }
}

/// A latitude/longitude grid over the whole globe, bucketing places into
/// `division × division` cells for expanding-ring nearest-neighbor search.
///
/// Built once during warm-up via repeated [`GeoGrid::insert`] calls, then
/// queried any number of times via [`GeoGrid::k_nearest`]. Queries never
/// mutate the grid.
pub struct GeoGrid {
    division: u32,
    lat_step: f64,
    lon_step: f64,
    cells: Vec<Vec<Vec<CellEntry>>>,
    distance_fn: DistanceFn,
}

impl GeoGrid {
    /// Creates an empty grid with `division` cells per axis (default 90,
    /// i.e. 2°-wide cells at the equator).
    ///
    /// # Panics
    ///
    /// Panics if `division == 0` — a zero-sized grid is a programmer error,
    /// not a condition callers should need to recover from.
    pub fn new(division: u32) -> Self {
        Self::with_distance_fn(division, haversine_miles)
    }

    /// Like [`GeoGrid::new`], but with an injected distance function —
    /// useful for tests that want a deterministic planar metric instead of
    /// great-circle trigonometry.
    ///
    /// # Panics
    ///
    /// Panics if `division == 0`.
    pub fn with_distance_fn(division: u32, distance_fn: DistanceFn) -> Self {
        assert!(division > 0, "GeoGrid::new: division must be > 0");
        let division_usize = division as usize;
        Self {
            division,
            lat_step: 180.0 / division as f64,
            lon_step: 360.0 / division as f64,
            cells: vec![vec![Vec::new(); division_usize]; division_usize],
            distance_fn,
        }
    }

    /// Number of cells per axis.
    pub fn division(&self) -> u32 {
        self.division
    }

    /// Inserts a place into the cell its coordinates map to.
    ///
    /// Re-inserting the same id is a no-op against that cell (cell
    /// placement is a pure function of coordinates, so a repeat insert of
    /// the same id necessarily targets the same cell).
    ///
    /// # Panics
    ///
    /// Panics if `place.latitude` is outside `[-90, 90]` or
    /// `place.longitude` is outside `[-180, 180]`. Callers with
    /// possibly-missing coordinates (e.g. the gazetteer loader) must check
    /// [`PlaceRecord::has_valid_coordinates`] before calling this.
    pub fn insert(&mut self, place: &PlaceRecord) {
        assert!(
            (-90.0..=90.0).contains(&place.latitude),
            "GeoGrid::insert: latitude {} out of range [-90, 90]",
            place.latitude
        );
        assert!(
            (-180.0..=180.0).contains(&place.longitude),
            "GeoGrid::insert: longitude {} out of range [-180, 180]",
            place.longitude
        );

        let (row, col) = self.cell_index(place.latitude, place.longitude);
        let bucket = &mut self.cells[row][col];
        if bucket.iter().any(|e| e.id == place.id) {
            return;
        }
        bucket.push(CellEntry {
            id: place.id,
            latitude: place.latitude as f32,
            longitude: place.longitude as f32,
            country_code: country_code_bytes(&place.country_code),
        });
    }

    /// Returns up to `k` nearest neighbors of `place`, ascending by
    /// distance (miles), ties broken by id ascending. `place` itself is
    /// never returned. When `same_country` is true, only entries sharing
    /// `place.country_code` are considered.
    ///
    /// May return fewer than `k` results (including none) if the grid
    /// doesn't hold that many eligible entries.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`, or if the injected distance function returns a
    /// non-finite value for two in-range coordinates.
    pub fn k_nearest(&self, place: &PlaceRecord, k: usize, same_country: bool) -> Vec<(f64, i64)> {
        assert!(k > 0, "GeoGrid::k_nearest: k must be > 0");

        let (row0, col0) = self.cell_index(place.latitude, place.longitude);
        let country = country_code_bytes(&place.country_code);
        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();

        for step in 0..self.division {
            for (row, col) in self.ring_cells(row0, col0, step) {
                for entry in &self.cells[row as usize][col as usize] {
                    if entry.id == place.id {
                        continue;
                    }
                    if same_country && entry.country_code != country {
                        continue;
                    }
                    let dist = (self.distance_fn)(
                        place.latitude,
                        place.longitude,
                        entry.latitude as f64,
                        entry.longitude as f64,
                    );
                    assert!(dist.is_finite(), "GeoGrid::k_nearest: non-finite distance");

                    if heap.len() < k {
                        heap.push(HeapEntry { dist, id: entry.id });
                    } else if dist < heap.peek().expect("heap non-empty").dist {
                        heap.pop();
                        heap.push(HeapEntry { dist, id: entry.id });
                    }
                }
            }
            if heap.len() >= k {
                break;
            }
        }

        let mut results: Vec<(f64, i64)> = heap.into_iter().map(|e| (e.dist, e.id)).collect();
        results.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .expect("distances are finite")
                .then_with(|| a.1.cmp(&b.1))
        });
        results
    }

    fn cell_index(&self, lat: f64, lon: f64) -> (usize, usize) {
        let max = self.division as usize - 1;
        let row = (((lat + 90.0) / self.lat_step).floor() as isize).clamp(0, max as isize) as usize;
        let col = (((lon + 180.0) / self.lon_step).floor() as isize).clamp(0, max as isize) as usize;
        (row, col)
    }

    /// Enumerates the ring of cells at Chebyshev distance exactly `step`
    /// from `(row0, col0)`. Rows clamp at the poles (no wrap); columns
    /// wrap modulo `division` at the ±180° seam.
    ///
    /// For `step >= 1` the four edges of the `(2*step+1)` square are
    /// walked north row, east column, south row, west column; the east and
    /// west column edges use the open interior row range so the corners
    /// (already covered by the north/south row edges) aren't scanned
    /// twice.
    fn ring_cells(&self, row0: usize, col0: usize, step: u32) -> Vec<(u32, u32)> {
        let division = self.division;
        let max_row = division as i64 - 1;
        let row0 = row0 as i64;
        let col0 = col0 as i64;
        let step = step as i64;

        if step == 0 {
            return vec![(row0 as u32, col0 as u32)];
        }

        let wrap_col = |c: i64| -> u32 { c.rem_euclid(division as i64) as u32 };

        let mut cells = Vec::new();

        let north_row = row0 - step;
        if (0..=max_row).contains(&north_row) {
            for c in (col0 - step)..=(col0 + step) {
                cells.push((north_row as u32, wrap_col(c)));
            }
        }

        let south_row = row0 + step;
        if (0..=max_row).contains(&south_row) {
            for c in (col0 - step)..=(col0 + step) {
                cells.push((south_row as u32, wrap_col(c)));
            }
        }

        let east_col = wrap_col(col0 + step);
        for r in (row0 - step + 1)..(row0 + step) {
            if (0..=max_row).contains(&r) {
                cells.push((r as u32, east_col));
            }
        }

        let west_col = wrap_col(col0 - step);
        // Once the ring's circumference reaches the grid's own width (large
        // step relative to division), the east and west edges land on the
        // same wrapped column; skip the second scan rather than revisit it.
        if west_col != east_col {
            for r in (row0 - step + 1)..(row0 + step) {
                if (0..=max_row).contains(&r) {
                    cells.push((r as u32, west_col));
                }
            }
        }

        cells
    }
}

fn country_code_bytes(code: &str) -> [u8; 2] {
    let bytes = code.as_bytes();
    let mut out = [0u8; 2];
    let n = bytes.len().min(2);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}
