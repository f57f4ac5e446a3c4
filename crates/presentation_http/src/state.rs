//! Application state shared across handlers

use std::sync::Arc;

use application::EnrichmentService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Enrichment pipeline
    pub enrichment: Arc<EnrichmentService>,
    /// Page templates
    pub templates: TemplateEngine,
    /// Suffix for rendered temperatures, e.g. `°F`
    pub unit_symbol: &'static str,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("enrichment", &self.enrichment)
            .field("unit_symbol", &self.unit_symbol)
            .finish_non_exhaustive()
    }
}
