pub mod collisions;
pub mod force_field;

pub use collisions::*;
pub use force_field::*;
