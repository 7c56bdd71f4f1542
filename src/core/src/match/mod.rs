pub mod engine;
pub mod result;

pub use engine::*;
pub use result::*;
