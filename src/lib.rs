//! OSM data extraction against Postpass, a PostGIS database exposed over HTTP.
//!
//! Builds small extraction `SELECT`s over the osm2pgsql flex schema
//! (`postpass_point`, `postpass_line`, `postpass_polygon` and their combined
//! geometry views) and runs them against a Postpass interpreter endpoint,
//! returning the GeoJSON the server responds with.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{DEFAULT_POSTPASS_ENDPOINT, HttpTransport, PostpassClient, UreqTransport};
pub use error::PostpassError;
pub use types::*;
