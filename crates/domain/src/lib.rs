//! Domain layer for StopScout
//!
//! Contains the value objects and entities that make up an enriched place
//! lookup: coordinates, the nearest stop, nearby events and current weather.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
