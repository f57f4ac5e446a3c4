//! Domain entities - the pieces of one enriched place lookup

mod enriched_result;
mod event;
mod stop;
mod weather;

pub use enriched_result::EnrichedResult;
pub use event::Event;
pub use stop::{ACCESSIBLE_BOARDING_CODE, Stop};
pub use weather::Weather;
