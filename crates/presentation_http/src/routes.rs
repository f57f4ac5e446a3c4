//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::pages::home))
        .route(
            "/mbta",
            get(handlers::pages::place_form).post(handlers::pages::place_result),
        )
        // JSON API (v1)
        .route("/v1/enrich", get(handlers::enrich::enrich_place))
        // Health
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}
