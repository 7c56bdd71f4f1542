pub mod input;
pub mod player;
pub mod team;

pub use input::*;
pub use player::*;
pub use team::*;
