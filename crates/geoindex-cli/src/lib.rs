//! geoindex-cli
//! ============
//!
//! Command-line interface for the `geoindex-core` spatial and lexical city
//! indexes.
//!
//! This crate primarily provides a binary (`geoindex`). A small library
//! target is included so docs.rs renders a documentation page for this
//! overview; the binary is the actual deliverable.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geoindex --help
//! geoindex -i cities.txt stats
//! geoindex -i cities.txt search "san jose"
//! geoindex -i cities.txt nearest 5391959 -k 10 --same-country
//! ```
//!
//! For programmatic access to [`GeoGrid`](geoindex_core::GeoGrid) and
//! [`TieredInvertedIndex`](geoindex_core::TieredInvertedIndex), depend on
//! `geoindex-core` directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable. The presence of this file enables a rendered page
// on docs.rs.
