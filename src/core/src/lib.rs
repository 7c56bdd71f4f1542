pub mod config;
pub mod r#match;
pub mod utils;

pub use nalgebra::*;
pub use utils::*;
