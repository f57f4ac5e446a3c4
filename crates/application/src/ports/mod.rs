//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod event_finder_port;
mod geocoding_port;
mod stop_locator_port;
mod weather_port;

#[cfg(test)]
pub use event_finder_port::MockEventFinderPort;
pub use event_finder_port::{DEFAULT_EVENT_RADIUS, EventFinderPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use stop_locator_port::MockStopLocatorPort;
pub use stop_locator_port::StopLocatorPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
