//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod events_adapter;
mod geocoding_adapter;
mod transit_adapter;
mod weather_adapter;

pub use events_adapter::TicketmasterEventsAdapter;
pub use geocoding_adapter::MapboxGeocodingAdapter;
pub use transit_adapter::MbtaStopAdapter;
pub use weather_adapter::WeatherAdapter;
