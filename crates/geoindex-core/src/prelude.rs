//! Convenience re-exports for downstream crates.
//!
//! ```
//! use geoindex_core::prelude::*;
//! ```

pub use crate::distance::{haversine_miles, DistanceFn};
pub use crate::error::{GeoIndexError, Result};
pub use crate::grid::GeoGrid;
pub use crate::index::TieredInvertedIndex;
pub use crate::loader::load_places;
pub use crate::place::PlaceRecord;
