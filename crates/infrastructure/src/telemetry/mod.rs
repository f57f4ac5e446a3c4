//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! pretty or a JSON formatting layer.

mod subscriber;

pub use subscriber::{TelemetryError, build_filter, init_tracing};
