//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the provider adapters, configuration loading, logging setup and
//! page templates.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use bootstrap::build_enrichment_service;
pub use config::{
    AppConfig, ConfigurationError, CredentialsConfig, LogFormat, ServerConfig, TelemetryAppConfig,
    WeatherUnits,
};
pub use telemetry::{TelemetryError, init_tracing};
pub use templates::{TemplateEngine, TemplateError};
