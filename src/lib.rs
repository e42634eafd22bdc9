//! geoindex-rs
//! ===========
//!
//! Workspace root for `geoindex-core` and `geoindex-cli`. This crate carries
//! no logic of its own — it re-exports `geoindex-core`'s prelude so the
//! runnable examples under `demos/` (and any other top-level integration
//! point) have a single `use` line to reach for.
//!
//! The actual index structures live in [`geoindex_core`]; see that crate's
//! documentation for [`GeoGrid`](geoindex_core::GeoGrid) and
//! [`TieredInvertedIndex`](geoindex_core::TieredInvertedIndex).

pub use geoindex_core::prelude;
pub use geoindex_core::*;
