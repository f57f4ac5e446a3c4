//! StopScout HTTP presentation layer
//!
//! Serves the place form, result pages and a JSON enrichment endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
