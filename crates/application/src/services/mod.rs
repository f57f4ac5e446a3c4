//! Application services

mod best_effort;
mod enrichment_service;

pub use best_effort::BestEffort;
pub use enrichment_service::EnrichmentService;
