//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod place_name;

pub use coordinates::Coordinates;
pub use place_name::PlaceName;
