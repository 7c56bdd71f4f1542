pub mod ai;
pub mod ball;
pub mod body;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod physics;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod vector;

pub use ai::*;
pub use ball::*;
pub use body::*;
pub use context::*;
pub use engine::*;
pub use field::*;
pub use player::*;
pub use snapshot::*;
pub use state::*;
pub use vector::*;
