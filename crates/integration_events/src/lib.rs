//! Nearby events integration for StopScout
//!
//! Lists upcoming events around a coordinate pair using the
//! [Ticketmaster Discovery API](https://developer.ticketmaster.com/products-and-docs/apis/discovery-api/v2/).
//!
//! Event records are parsed leniently: any missing field falls back to a
//! placeholder rather than failing the whole response.

mod client;
mod config;
mod error;
mod models;

pub use client::{EventsClient, TicketmasterClient};
pub use config::{EVENT_PAGE_SIZE, EventsConfig};
pub use error::EventsError;
pub use models::EventsResponse;
