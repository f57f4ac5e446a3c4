//! Transit integration for StopScout
//!
//! Resolves place names to coordinates via the
//! [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/) API and
//! finds the nearest stop via the [MBTA v3](https://api-v3.mbta.com) API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`TransitClient`] defines the nearest-stop lookup, implemented by
//! [`MbtaTransitClient`]. [`GeocodingClient`] handles place-to-coordinate
//! conversion via [`MapboxGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{MbtaTransitClient, TransitClient, TransitConfig};
//!
//! let config = TransitConfig {
//!     api_key: Some(key),
//!     ..TransitConfig::default()
//! };
//! let client = MbtaTransitClient::new(&config)?;
//!
//! let stop = client.nearest_stop(&coordinates).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{MbtaTransitClient, TransitClient, stop_query_params};
pub use config::TransitConfig;
pub use error::TransitError;
pub use geocoding::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
pub use models::{StopAttributes, StopResource, StopsResponse};
