pub mod controller;
pub mod difficulty;
pub mod roles;

pub use controller::*;
pub use difficulty::*;
pub use roles::*;
